//  ____  ____                  ____
// |  _ \|  _ \ __ _ ___ ___   / ___| ___ _ __
// | |_) | |_) / _` / __/ __| | |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ | |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure random password generator written in Rust.

use clap::Parser;

use rpassgen::commands::{defaults, password_gen, testpass};

#[derive(Debug, Parser)]
#[command(name = "rpassgen")]
#[command(about = "A secure random password generator written in Rust", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Test password strength and properties
    Testpass(TestpassArgs),

    /// Show or update saved generation defaults
    Defaults(DefaultsArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (saved default when omitted)
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    no_symbols: bool,

    /// Exclude visually similar characters (i, l, 1, L, o, 0, O)
    #[arg(short = 'x', long, default_value_t = false)]
    exclude_similar: bool,
}

#[derive(Debug, Parser)]
struct TestpassArgs {
    /// Password to test
    password: String,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    check_confusion: bool,
}

#[derive(Debug, Parser)]
struct DefaultsArgs {
    /// Default password length
    #[arg(short, long)]
    length: Option<usize>,

    /// Include uppercase letters by default
    #[arg(long)]
    uppercase: Option<bool>,

    /// Include lowercase letters by default
    #[arg(long)]
    lowercase: Option<bool>,

    /// Include numbers by default
    #[arg(long)]
    numbers: Option<bool>,

    /// Include symbols by default
    #[arg(long)]
    symbols: Option<bool>,

    /// Exclude visually similar characters by default
    #[arg(long)]
    exclude_similar: Option<bool>,
}

impl DefaultsArgs {
    fn is_empty(&self) -> bool {
        self.length.is_none()
            && self.uppercase.is_none()
            && self.lowercase.is_none()
            && self.numbers.is_none()
            && self.symbols.is_none()
            && self.exclude_similar.is_none()
    }
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => password_gen::generate_random(
            args.length,
            args.no_uppercase,
            args.no_lowercase,
            args.no_numbers,
            args.no_symbols,
            args.exclude_similar,
        ),
        Cli::Testpass(args) => testpass::test_password(args.password, args.check_confusion),
        Cli::Defaults(args) => {
            if args.is_empty() {
                defaults::show_defaults()
            } else {
                defaults::update_defaults(
                    args.length,
                    args.uppercase,
                    args.lowercase,
                    args.numbers,
                    args.symbols,
                    args.exclude_similar,
                )
            }
        }
    }
}
