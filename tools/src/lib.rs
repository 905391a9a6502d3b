use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

use env_logger::Env;
use log::debug;
use nbtcodec::{
    from_bytes_with_compression, Compression, DeOpts, Gzip, NamedTag, Value, Zlib,
};

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

/// Pick the codec a file was written with. Level and player data are GZip,
/// chunks pulled out of region files are usually Zlib.
pub fn detect_compression(data: &[u8]) -> &'static dyn Compression {
    if Zlib.is_compressed(data) {
        &Zlib
    } else {
        &Gzip
    }
}

pub fn read_nbt(path: &Path, opts: DeOpts) -> Result<NamedTag> {
    let data = std::fs::read(path)?;
    debug!("read {} bytes from {}", data.len(), path.display());

    let tag = from_bytes_with_compression(&data, detect_compression(&data), opts)?;
    Ok(tag)
}

/// Write an indented, one tag per line view of `tag`.
pub fn dump<W: Write>(out: &mut W, tag: &NamedTag) -> io::Result<()> {
    dump_value(out, tag.name(), tag.value(), 0)
}

fn dump_value<W: Write>(out: &mut W, name: Option<&str>, value: &Value, indent: usize) -> io::Result<()> {
    let label = match name {
        Some(name) => format!("{:?}: ", name),
        None => String::new(),
    };

    match value {
        Value::Compound(members) => {
            writeln!(out, "{:indent$}{}Compound ({} entries)", "", label, members.len(), indent = indent)?;
            for member in members {
                dump_value(out, member.name(), member.value(), indent + 4)?;
            }
        }
        Value::List(list) => {
            writeln!(
                out,
                "{:indent$}{}List of {:?} ({} entries)",
                "",
                label,
                list.element_tag(),
                list.len(),
                indent = indent
            )?;
            for item in list {
                dump_value(out, None, item, indent + 4)?;
            }
        }
        v => writeln!(out, "{:indent$}{}{:?}", "", label, v, indent = indent)?,
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use nbtcodec::{List, Tag};

    use super::*;

    #[test]
    fn dump_indents_nested() {
        let tag = NamedTag::compound(
            "root",
            vec![
                NamedTag::byte("b", 1),
                NamedTag::list(
                    "l",
                    List::new(Tag::Int, vec![Value::Int(2)]).unwrap(),
                ),
            ],
        );

        let mut out = vec![];
        dump(&mut out, &tag).unwrap();

        let expected = "\"root\": Compound (2 entries)\n\
                        \x20   \"b\": Byte(1)\n\
                        \x20   \"l\": List of Int (1 entries)\n\
                        \x20       Int(2)\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn detects_codec() {
        assert!(detect_compression(&[0x78, 0x9c]).is_compressed(&[0x78, 0x9c]));
        assert!(detect_compression(&[0x1f, 0x8b]).is_compressed(&[0x1f, 0x8b]));
        assert!(!detect_compression(&[0x0a, 0x00]).is_compressed(&[0x0a, 0x00]));
    }
}
