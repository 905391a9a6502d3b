use std::io::{self, Write};
use std::path::Path;

use clap::{App, Arg};
use log::info;
use nbtcodec::DeOpts;
use nbtcodec_tools::{dump, init_logging, read_nbt, Result};

fn main() -> Result<()> {
    init_logging();

    let matches = App::new("nbt-dump")
        .about("Print the contents of an NBT file")
        .arg(Arg::with_name("file").takes_value(true).required(true))
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .required(false),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .required(false),
        )
        .get_matches();

    let mut opts = DeOpts::new();
    if let Some(depth) = matches.value_of("max-depth") {
        opts = opts.max_depth(depth.parse()?);
    }

    let path = Path::new(matches.value_of("file").unwrap_or_default());
    let tag = read_nbt(path, opts)?;
    info!("decoded {:?} tag from {}", tag.tag(), path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches.is_present("json") {
        serde_json::to_writer_pretty(&mut out, &tag)?;
        writeln!(out)?;
    } else {
        dump(&mut out, &tag)?;
    }

    Ok(())
}
