use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the training diagram.
pub fn parse_cli() -> (String, PathBuf, PathBuf) {
    let arg_title = Arg::with_name("title")
        .help("title of the training diagram")
        .short("t")
        .long("title")
        .takes_value(true)
        .default_value("EAGLE Training Log");
    let arg_logfile = Arg::with_name("logfile")
        .help("master training log file")
        .short("l")
        .long("logfile")
        .takes_value(true)
        .default_value("master.log");
    let arg_outfile = Arg::with_name("outfile")
        .help("output image for the training diagram, format follows the extension")
        .short("o")
        .long("outfile")
        .takes_value(true)
        .default_value("master.png");
    let cli_args = App::new("eagle_diagram")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot accuracy over elapsed time from an EAGLE training log")
        .arg(arg_title)
        .arg(arg_logfile)
        .arg(arg_outfile)
        .get_matches();
    let title = String::from(cli_args.value_of("title").unwrap_or_default());
    let logfile = PathBuf::from(cli_args.value_of("logfile").unwrap_or_default());
    let outfile = PathBuf::from(cli_args.value_of("outfile").unwrap_or_default());
    return (title, logfile, outfile);
}
