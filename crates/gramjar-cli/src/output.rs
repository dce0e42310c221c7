//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use gramjar_core::PostCollection;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a drained collection: one JSON object per line, or a pretty
/// array with `pretty`.
pub fn post_collection(posts: &PostCollection, pretty: bool) -> Result<()> {
    if posts.is_empty() {
        eprintln!("{}", "No posts found.".dimmed());
        return Ok(());
    }

    if pretty {
        json_pretty(posts)
    } else {
        for post in posts.iter() {
            json(post)?;
        }
        Ok(())
    }
}
