use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

const PRINT_HELP: &str = "\
Print the value contained in between the <start> and <stop> bits of a (big) number.
The bit position starts at 0.

Example:
The below command prints 17187 (value contained in between bit positions 77 and 92).

    bitman p 0x86460000000000000000000 77 92";

const MODIFY_HELP: &str = "\
Set the value contained in between the <start> and <stop> bits of a (big) number.
The bit position starts at 0. The result is printed in hexadecimal.

Example:
The value contained in between bit positions 77 and 92 of the below number is 17187.
To make it 16000, the below command may be used.

    bitman m 0x86460000000000000000000 77 92 16000";

/// Bit manipulation tool for big numbers
///
/// Numbers are decimal, or hexadecimal when prefixed with 0x.
/// `bitman <number> <start bit> <stop bit>` prints the selected bits and
/// `bitman <number> <start bit> <stop bit> <new value>` modifies them.
#[derive(Parser, Debug)]
#[command(name = "bitman", version, arg_required_else_help = true)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter directive, e.g. "debug" (overrides --verbose)
    #[arg(long, env = "BITMAN_LOG", global = true)]
    pub log: Option<String>,

    /// Print the result as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub bare: BareArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the selected bits
    #[command(visible_alias = "p", long_about = PRINT_HELP)]
    Print(FieldArgs),

    /// Modify the selected bits of a value
    #[command(visible_alias = "m", long_about = MODIFY_HELP)]
    Modify(ModifyArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct FieldArgs {
    /// Number to read from (decimal, or hex prefixed with 0x)
    pub number: String,
    /// Lowest bit of the field, 0 being the least significant bit
    pub start_bit: String,
    /// Highest bit of the field, inclusive
    pub stop_bit: String,
}

#[derive(Args, Debug)]
pub struct ModifyArgs {
    #[command(flatten)]
    pub field: FieldArgs,
    /// Value to store in the field (decimal, or hex prefixed with 0x)
    pub new_value: String,
}

/// Positional form without a subcommand: three arguments print, four modify.
#[derive(Args, Debug)]
pub struct BareArgs {
    #[arg(value_name = "NUMBER")]
    pub bare_number: Option<String>,
    #[arg(value_name = "START_BIT")]
    pub bare_start_bit: Option<String>,
    #[arg(value_name = "STOP_BIT")]
    pub bare_stop_bit: Option<String>,
    #[arg(value_name = "NEW_VALUE")]
    pub bare_new_value: Option<String>,
}

/// What to compute, independent of how it was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub field: FieldArgs,
    /// `None` reads the field, `Some` replaces it.
    pub new_value: Option<String>,
}

impl Cli {
    /// Resolves the subcommand or the positional form into a [Request].
    pub fn request(&self) -> Result<Request, clap::Error> {
        match &self.command {
            Some(Command::Print(field)) => Ok(Request {
                field: field.clone(),
                new_value: None,
            }),
            Some(Command::Modify(args)) => Ok(Request {
                field: args.field.clone(),
                new_value: Some(args.new_value.clone()),
            }),
            None => self.bare.request(),
        }
    }
}

impl BareArgs {
    fn request(&self) -> Result<Request, clap::Error> {
        match (&self.bare_number, &self.bare_start_bit, &self.bare_stop_bit) {
            (Some(number), Some(start_bit), Some(stop_bit)) => Ok(Request {
                field: FieldArgs {
                    number: number.clone(),
                    start_bit: start_bit.clone(),
                    stop_bit: stop_bit.clone(),
                },
                new_value: self.bare_new_value.clone(),
            }),
            _ => Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "expected <NUMBER> <START_BIT> <STOP_BIT> [NEW_VALUE]",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(args: &[&str]) -> Result<Request, clap::Error> {
        Cli::try_parse_from(args)?.request()
    }

    fn field(number: &str, start_bit: &str, stop_bit: &str) -> FieldArgs {
        FieldArgs {
            number: number.to_string(),
            start_bit: start_bit.to_string(),
            stop_bit: stop_bit.to_string(),
        }
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_print_alias() {
        assert_eq!(
            request(&["bitman", "p", "5004", "0", "2"]).unwrap(),
            Request {
                field: field("5004", "0", "2"),
                new_value: None,
            }
        );
    }

    #[test]
    fn test_modify() {
        assert_eq!(
            request(&["bitman", "modify", "0x4b0c", "4", "11", "0x7f"]).unwrap(),
            Request {
                field: field("0x4b0c", "4", "11"),
                new_value: Some("0x7f".to_string()),
            }
        );
    }

    #[test]
    fn test_bare_print() {
        assert_eq!(
            request(&["bitman", "0x4b0c", "4", "11"]).unwrap(),
            Request {
                field: field("0x4b0c", "4", "11"),
                new_value: None,
            }
        );
    }

    #[test]
    fn test_bare_modify() {
        assert_eq!(
            request(&["bitman", "0x235004", "4", "7", "8"]).unwrap().new_value,
            Some("8".to_string())
        );
    }

    #[test]
    fn test_bare_too_few_arguments() {
        let err = request(&["bitman", "5004", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_print_missing_arguments() {
        let err = request(&["bitman", "p", "5004"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_modify_too_many_arguments() {
        assert!(request(&["bitman", "m", "1", "0", "0", "1", "2"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bitman", "p", "5004", "0", "2", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }
}
