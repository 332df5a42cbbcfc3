use clap::{Parser, ValueEnum};
use log::info;

use sentinel_rs::boolean::Tristate;
use sentinel_rs::sentinel::Sentinel;
use sentinel_rs::wrapper::{BytesValue, Wrapper};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Kind {
    Bool,
    Int,
    Str,
    Float,
    Bytes,
}

/// Merge two layered values and show how each operation treats them.
///
/// The literal `unspecified` selects the sentinel of the chosen kind.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Value kind.
    #[arg(short, long, value_enum, default_value_t = Kind::Int)]
    kind: Kind,

    /// Current (lower-precedence) value.
    current: String,

    /// Incoming (higher-precedence) value.
    incoming: String,

    /// Log level.
    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

const UNSPECIFIED_WORD: &str = "unspecified";

fn report<T: Sentinel>(current: T, incoming: T) {
    println!("current  = {}", current.render());
    println!("incoming = {}", incoming.render());
    println!("same     = {}", current.same(&incoming));
    println!("equal    = {}", current.equal(&incoming));
    println!("fallback = {}", current.clone().take_or_else(incoming.clone()).render());
    println!("merged   = {}", current.merge(incoming).render());
}

fn parse_int(s: &str) -> color_eyre::Result<i64> {
    if s == UNSPECIFIED_WORD {
        return Ok(i64::unspecified());
    }
    Ok(s.parse()?)
}

fn parse_float(s: &str) -> color_eyre::Result<f64> {
    if s == UNSPECIFIED_WORD {
        return Ok(f64::unspecified());
    }
    Ok(s.parse()?)
}

fn parse_str(s: &str) -> String {
    if s == UNSPECIFIED_WORD {
        String::unspecified()
    } else {
        s.to_string()
    }
}

fn parse_bytes(s: &str) -> color_eyre::Result<Wrapper<BytesValue>> {
    if s == UNSPECIFIED_WORD {
        return Ok(Wrapper::unspecified());
    }
    Ok(Wrapper::new(BytesValue::new(hex::decode(s)?)))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    info!("args = {:?}", args);

    match args.kind {
        Kind::Bool => report(
            args.current.parse::<Tristate>()?,
            args.incoming.parse::<Tristate>()?,
        ),
        Kind::Int => report(parse_int(&args.current)?, parse_int(&args.incoming)?),
        Kind::Str => report(parse_str(&args.current), parse_str(&args.incoming)),
        Kind::Float => report(parse_float(&args.current)?, parse_float(&args.incoming)?),
        Kind::Bytes => {
            let current = parse_bytes(&args.current)?;
            let incoming = parse_bytes(&args.incoming)?;
            println!("current  = {}", current);
            println!("incoming = {}", incoming);
            println!("same     = {}", current.same(&incoming));
            println!("equal    = {}", current.equal(&incoming));
            println!("fallback = {}", current.take_or_else(&incoming));
            println!("merged   = {}", current.merge(&incoming));
            println!("copy     = {}", current.duplicate());
        }
    }

    Ok(())
}
