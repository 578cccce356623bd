use openapi_http::convert::{self, check_file, convert_file};

use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;

/// Turns OpenAPI 3.x and Swagger 2.0 documents into `.http` request files.
#[derive(Parser)]
#[clap(name = "openapi-http", version)]
struct OpenapiHttp {
    #[clap(subcommand)]
    subcommand: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a YAML or JSON API document
    Convert {
        source: PathBuf,
        /// Where to write the requests, defaults to the source path with an
        /// `.http` extension
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Print the requests instead of writing a file
        #[clap(long, conflicts_with = "output")]
        stdout: bool,
    },
}

fn run(cli: OpenapiHttp) -> openapi_http::Result<()> {
    match cli.subcommand {
        Command::Convert {
            source,
            output,
            stdout,
        } => {
            if stdout {
                let format = check_file(&source)?;
                let text = std::fs::read_to_string(&source)?;
                println!("{}", convert::convert_str(&text, format)?);
            } else {
                let output = convert_file(&source, output.as_deref())?;
                println!("Generated .http file at {}", output.display());
            }
        }
    }
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let cli = OpenapiHttp::parse();
    if let Err(e) = run(cli) {
        error!("{e:?}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
