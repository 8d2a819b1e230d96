//! `typeuri segments` – print path segments.

use anyhow::Result;
use typeuri_core::TypeUri;

pub fn run_segments(input: &str) -> Result<()> {
    let uri = TypeUri::parse(input)?;
    for segment in uri.path_segments() {
        println!("{segment}");
    }
    Ok(())
}
