extern crate carryon;
extern crate console;
extern crate log;
extern crate pretty_env_logger;
extern crate structopt;

use std::path::PathBuf;

use carryon::{
    items,
    showcase::{Showcase, Strategy},
    HeadlineError,
};
use console::{style, Style};
use log::info;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Args {
    #[structopt(short, long)]
    /// Read items from this file instead of the built-in sample list
    ///
    /// One item per line, `~` marks a missing item, `#` starts a comment.
    items: Option<PathBuf>,

    #[structopt(short = "e", long = "example")]
    /// Strategy to run, by name or number (may be repeated)
    ///
    /// inline (1), helper (2), propagate (3), lift (4), lift-with-input (5).
    /// Defaults to inline, helper and lift.
    examples: Vec<Strategy>,

    #[structopt(long)]
    /// Never colour the output
    no_color: bool,
}

fn fail(e: &dyn HeadlineError) -> ! {
    println!("{}", style(e.headline()).red().bold());
    println!("{}", e.body());
    std::process::exit(-1);
}

fn main() {
    pretty_env_logger::init();

    info!(
        "Starting {} version {}",
        env!("CARGO_BIN_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::from_args();

    let info_style = Style::new().cyan();

    let list = match &args.items {
        Some(path) => {
            println!(
                "{} {}",
                info_style.apply_to("Reading items from:"),
                path.display()
            );
            items::read_items(path).unwrap_or_else(|e| fail(&e))
        }
        None => items::sample_items(),
    };

    let strategies = if args.examples.is_empty() {
        Strategy::DEFAULT.to_vec()
    } else {
        args.examples
    };

    let mut showcase = Showcase::new(log::logger(), std::io::stdout())
        .colored(!args.no_color && console::colors_enabled());

    for strategy in strategies {
        println!(
            "{}",
            info_style.apply_to(format!("== {} ({})", strategy, strategy.number()))
        );

        if let Err(e) = showcase.run(strategy, &list) {
            fail(&e);
        }
    }

    info!("{} finished", env!("CARGO_BIN_NAME"));
}
