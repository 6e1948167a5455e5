//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Content-addressed asset references: hash, name, copy or inline static files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "assets.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Project root (default: directory of the config file, else current directory)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve asset files into URIs, copying or inlining them
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Print the digest a hash placeholder would produce for a file
    #[command(visible_alias = "h")]
    Hash {
        #[command(flatten)]
        args: HashArgs,
    },
}

/// Resolve command arguments. Flags override the config file.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Asset files (relative paths are resolved against the current directory)
    #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Name template, e.g. `[path][name].[hash:8].[ext]`
    #[arg(short, long)]
    pub name: Option<String>,

    /// URI prefix for resolved names
    #[arg(short, long)]
    pub public_path: Option<String>,

    /// Output directory relative to the root (repeat for several)
    #[arg(short, long = "output-path", value_name = "DIR", conflicts_with = "no_output")]
    pub output_path: Vec<PathBuf>,

    /// Reference files without copying them
    #[arg(long)]
    pub no_output: bool,

    /// Directory `[path]` is computed from, relative to the root
    #[arg(short = 'x', long)]
    pub context: Option<String>,

    /// Inline files smaller than this many bytes
    #[arg(short, long)]
    pub limit: Option<u64>,
}

/// Hash command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct HashArgs {
    /// File to digest
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Hash algorithm (md5, sha1, sha224, sha256, sha384, sha512, blake3)
    #[arg(short, long, default_value = "md5")]
    pub algorithm: String,

    /// Digest type (hex, base26, base32, base36, base49, base52, base58, base62, base64)
    #[arg(short, long, default_value = "hex")]
    pub digest: String,

    /// Maximum digest length
    #[arg(short, long)]
    pub length: Option<usize>,
}
