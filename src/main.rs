use std::io;

use ts_size_report::action::cli::{process_args, report_completion};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let output = process_args(args)?;
    report_completion(&mut io::stdout(), &output)
}
