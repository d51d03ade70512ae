//! Writes the DAR JSON Schemas to `schema/` at the workspace root.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use dar_format::{document_schemas, to_pretty_string};

fn main() -> anyhow::Result<()> {
    let out_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../schema");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for named in document_schemas() {
        let path = out_dir.join(format!("{}.json", named.name));
        let json = to_pretty_string(&named.schema)?;
        fs::write(&path, json + "\n").with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
