use std::{
    collections::BTreeMap,
    io::{BufWriter, Write},
    path::PathBuf,
};

// Embeds the `migrations/` directory as a `&[Migration]` slice. Migrations
// are paired by file stem: `<name>.up.sql` and `<name>.down.sql`.
fn main() {
    println!("cargo::rerun-if-changed=migrations");

    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let mut migrations: BTreeMap<String, (String, String)> = BTreeMap::new();
    for entry in dir.read_dir().unwrap() {
        let entry = entry.unwrap();
        let filename = entry.file_name().into_string().unwrap();
        let content = std::fs::read_to_string(entry.path()).unwrap();
        if let Some(name) = filename.strip_suffix(".up.sql") {
            migrations.entry(name.to_owned()).or_default().0 = content;
        } else if let Some(name) = filename.strip_suffix(".down.sql") {
            migrations.entry(name.to_owned()).or_default().1 = content;
        }
    }

    let out = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("migrations.rs");
    let mut writer = BufWriter::new(std::fs::File::create(&out).unwrap());
    write!(&mut writer, "&[").unwrap();
    for (name, (up, down)) in migrations {
        write!(
            &mut writer,
            "Migration{{name:{name:?},up:{up:?},down:{down:?}}},"
        )
        .unwrap();
    }
    write!(&mut writer, "]").unwrap();
    writer.flush().unwrap();

    println!("cargo::rustc-env=MIGRATIONS={}", out.display());
}
