use anyhow::{Context, Result};
use tempora::config::Config;
use tempora::constants::{FEATURE_DISABLED, FEATURE_ENABLED};
use tempora::feature::AuthContext;
use tempora::utils::date::date_time_format_with;
use tempora::{logger, Operand, TimeUnit, Timer, TimeValue};

const USAGE: &str = "\
Usage:
  tempora convert <value> <from-unit> <to-unit> [--scale <minutes>]
  tempora feature <name> [--user <id>] [--role <role>]...
  tempora date <date> <time> [--no-seconds] [--day]
  tempora init-config [path]

Units: days, hours, minutes, seconds, clock, units";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE);
        return Ok(());
    };

    if command == "init-config" {
        let path = match rest.first() {
            Some(path) => path.into(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let (config, config_path) = Config::load_located()?;
    logger::init(&config.logging)?;
    match &config_path {
        Some(path) => log::debug!("Using configuration from {}", path.display()),
        None => log::debug!("No configuration file found, using defaults"),
    }

    match command.as_str() {
        "convert" => convert(rest, &config),
        "feature" => feature(rest, &config),
        "date" => date(rest, &config),
        other => {
            eprintln!("❌ Unknown command '{}'\n\n{}", other, USAGE);
            Ok(())
        }
    }
}

fn convert(args: &[String], config: &Config) -> Result<()> {
    let [value, from, to, options @ ..] = args else {
        anyhow::bail!("convert needs <value> <from-unit> <to-unit>\n\n{}", USAGE);
    };

    let from: TimeUnit = from.parse()?;
    let to: TimeUnit = to.parse()?;

    let scale = match option_value(options, "--scale") {
        Some(scale) => scale.parse::<f64>().context("--scale must be a number")?,
        None => config.timer.minutes_per_unit,
    };

    let timer = match from {
        TimeUnit::Clock => Timer::as_clock_time(value)?,
        unit => {
            let magnitude = match value.parse::<Operand>()? {
                Operand::Number(n) => n,
                Operand::Clock(_) => anyhow::bail!("'{}' is not a number of {}", value, unit),
            };
            Timer::with_value(numeric_value(unit, magnitude))
        }
    };

    let converted = timer.set_minutes_per_unit(scale)?.convert(to);
    println!("{}", converted);
    Ok(())
}

fn feature(args: &[String], config: &Config) -> Result<()> {
    let Some((name, options)) = args.split_first() else {
        anyhow::bail!("feature needs <name>\n\n{}", USAGE);
    };

    let mut context = AuthContext::new(config.environment.clone());
    if let Some(user) = option_value(options, "--user") {
        context = context.with_user(user);
    }
    for role in option_values(options, "--role") {
        context = context.with_role(role);
    }

    let enabled = config.features().is_enabled(name, &context);
    println!("{}: {}", name, if enabled { FEATURE_ENABLED } else { FEATURE_DISABLED });
    Ok(())
}

fn date(args: &[String], config: &Config) -> Result<()> {
    let [date, time, options @ ..] = args else {
        anyhow::bail!("date needs <date> <time>\n\n{}", USAGE);
    };

    let datetime = format!("{} {}", date, time);
    let drop_seconds = options.iter().any(|option| option == "--no-seconds");
    let show_day = options.iter().any(|option| option == "--day");

    let rendered = date_time_format_with(&datetime, &config.display, drop_seconds, show_day)
        .with_context(|| format!("'{}' is not a valid date and time", datetime))?;
    println!("{}", rendered);
    Ok(())
}

fn numeric_value(unit: TimeUnit, magnitude: f64) -> TimeValue {
    match unit {
        TimeUnit::Day => TimeValue::Days(magnitude),
        TimeUnit::Hour => TimeValue::Hours(magnitude),
        TimeUnit::Minute => TimeValue::Minutes(magnitude),
        TimeUnit::Unit => TimeValue::Units(magnitude),
        TimeUnit::Second | TimeUnit::Clock => TimeValue::Seconds(magnitude),
    }
}

fn option_value<'a>(options: &'a [String], flag: &'a str) -> Option<&'a str> {
    option_values(options, flag).next()
}

fn option_values<'a>(options: &'a [String], flag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    options
        .windows(2)
        .filter(move |pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
}
