//! Usage command

use crate::catalog::simple_name;
use crate::core::error::Result;
use crate::usage::{self, split_camel_case};
use clap::Parser;

/// Arguments for the usage command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:
    fitcomplete usage setValue int            | set | [int] | value |
    fitcomplete usage BrowserTest String -k   | browser test | [String] |")]
pub struct UsageArgs {
    /// Operation (or, with --constructor, type) identifier
    pub name: String,

    /// Parameter types in declared order
    pub params: Vec<String>,

    /// Synthesize a constructor row instead of an operation row
    #[arg(short = 'k', long)]
    pub constructor: bool,
}

pub fn run(args: UsageArgs) -> Result<()> {
    let row = render(&args);
    println!("{}", row);
    println!("{}", usage::context_help(usage::wiki_text(&row)));
    Ok(())
}

fn render(args: &UsageArgs) -> String {
    let params: Vec<&str> = args.params.iter().map(|p| simple_name(p)).collect();
    if args.constructor {
        usage::constructor_usage(simple_name(&args.name), &params)
    } else {
        usage::method_usage(&split_camel_case(&args.name), &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, params: &[&str], constructor: bool) -> UsageArgs {
        UsageArgs {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
            constructor,
        }
    }

    #[test]
    fn test_render_operation() {
        assert_eq!(
            render(&args("setValue", &["java.lang.Integer"], false)),
            "| set | [Integer] | value |"
        );
    }

    #[test]
    fn test_render_constructor() {
        assert_eq!(
            render(&args("nl.example.BrowserTest", &["String"], true)),
            "| browser test | [String] |"
        );
    }
}
