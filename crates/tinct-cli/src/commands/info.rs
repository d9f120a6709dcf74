//! Color info command.
//!
//! Prints a color in every notation together with luminance and contrast
//! against black and white.

use crate::InfoArgs;
use crate::commands::Output;
use anyhow::Result;
use serde_json::json;
use tinct_color::{ColorValue, Notation};

/// Runs the info command for each color given.
pub fn run(args: InfoArgs, out: &Output) -> Result<()> {
    for (idx, notation) in args.color.iter().enumerate() {
        let color = out.load(notation)?;
        if out.json {
            print_json(notation, &color, out)?;
        } else {
            print_text(notation, &color);
        }
        if args.color.len() > 1 && idx + 1 < args.color.len() {
            println!();
        }
    }
    Ok(())
}

/// Prints info in human-readable text format.
fn print_text(input: &str, color: &ColorValue) {
    let white = ColorValue::from_rgba(255.0, 255.0, 255.0, 1.0);
    let black = ColorValue::default();

    println!("{input}");
    for notation in Notation::ALL {
        let label = format!("{}:", notation.name());
        println!("  {label:<12} {}", color.format(notation));
    }
    println!("  Luminance:   {:.4}", color.luminance());
    println!("  On white:    {:.2}:1", color.contrast_ratio(&white));
    println!("  On black:    {:.2}:1", color.contrast_ratio(&black));
    if color.is_achromatic() {
        println!("  Achromatic");
    }
}

/// Prints info as a JSON object.
fn print_json(input: &str, color: &ColorValue, out: &Output) -> Result<()> {
    let mut value = out.to_json(color);
    let notations: serde_json::Map<String, serde_json::Value> = Notation::ALL
        .iter()
        .map(|n| (n.name().to_string(), json!(color.format(*n))))
        .collect();
    value["input"] = json!(input);
    value["cmyk"] = json!(color.cmyk_values());
    value["notations"] = serde_json::Value::Object(notations);
    value["achromatic"] = json!(color.is_achromatic());
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
