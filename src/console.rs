mod console_report;

pub use console_report::ConsoleReport;
