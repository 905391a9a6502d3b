//! This executable takes a path to a level.dat file for a world, and spits out
//! a new level.dat file in the current directory. The data is changed so that
//! the world spawn is set to 0,100,0.
//!
//! Trees are immutable, so the changed level is built as a new tree from the
//! parts of the old one.

use nbtcodec::{from_bytes, to_bytes, NamedTag, Value};

fn respawn(data: NamedTag) -> NamedTag {
    let (name, value) = data.into_parts();
    let members = match value {
        Value::Compound(members) => members,
        other => panic!("Data should be a compound, found {:?}", other.tag()),
    };

    let members = members
        .into_iter()
        .map(|member| {
            let spawn = match member.name() {
                Some("SpawnX") => Some(("SpawnX", 0)),
                Some("SpawnY") => Some(("SpawnY", 100)),
                Some("SpawnZ") => Some(("SpawnZ", 0)),
                _ => None,
            };

            match spawn {
                Some((name, value)) => NamedTag::int(name, value),
                None => member,
            }
        })
        .collect();

    NamedTag::new(name, Value::Compound(members))
}

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    let bytes = std::fs::read(&args[1]).unwrap();

    // level.dat is GZip compressed, from_bytes notices and inflates it.
    let (name, level) = from_bytes(&bytes).unwrap().into_parts();
    let members = match level {
        Value::Compound(members) => members,
        _ => panic!("level.dat should hold a compound"),
    };

    let members = members
        .into_iter()
        .map(|member| {
            if member.name() == Some("Data") {
                respawn(member)
            } else {
                member
            }
        })
        .collect();

    let leveldat = NamedTag::new(name, Value::Compound(members));
    let new_bytes = to_bytes(&leveldat, true).unwrap();
    std::fs::write("level.dat", new_bytes).unwrap();
}
