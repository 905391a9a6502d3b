use std::path::Path;

use clap::{App, Arg};
use log::{error, info};
use nbtcodec::{from_bytes, to_bytes, DeOpts};
use nbtcodec_tools::{init_logging, read_nbt, Result};

fn main() -> Result<()> {
    init_logging();

    let matches = App::new("nbt-recode")
        .about("Decode an NBT file and encode it again")
        .arg(Arg::with_name("input").takes_value(true).required(true))
        .arg(Arg::with_name("output").takes_value(true).required(true))
        .arg(
            Arg::with_name("no-compress")
                .long("no-compress")
                .takes_value(false)
                .required(false),
        )
        .get_matches();

    let input = Path::new(matches.value_of("input").unwrap_or_default());
    let output = Path::new(matches.value_of("output").unwrap_or_default());
    let compress = !matches.is_present("no-compress");

    let tag = read_nbt(input, DeOpts::new())?;
    let bytes = to_bytes(&tag, compress)?;

    // What we write must read back as the same tree.
    if from_bytes(&bytes)? != tag {
        error!("{} did not survive a round trip", input.display());
        return Err("round trip mismatch".into());
    }

    std::fs::write(output, &bytes)?;
    info!(
        "wrote {} bytes to {} ({})",
        bytes.len(),
        output.display(),
        if compress { "gzip" } else { "uncompressed" }
    );

    Ok(())
}
