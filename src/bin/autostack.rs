use anyhow::{bail, Result};
use autostack::{
    args::{Args, Commands, Parser},
    catalog::CATALOG,
    config::Settings,
    error, info,
    materialize::Compose,
    prompt::Terminal,
    registry, stack, trace,
};
use std::process::ExitCode;

const BANNER: &str = "AutoStack CLI. Use -h for help.";
/// Shell convention for a process stopped by SIGINT.
const INTERRUPTED: u8 = 130;

fn app(args: &Args) -> Result<()> {
    match args.command {
        None => {
            println!("{BANNER}");
            Ok(())
        }
        Some(Commands::List { short }) => {
            if short {
                println!(
                    "{}",
                    registry::list().map(|l| l.name).collect::<Vec<_>>().join(" ")
                );
            } else {
                println!("\nAvailable stacks:");
                registry::list().for_each(|l| println!("  {l}"));
                println!();
            }
            Ok(())
        }
        Some(Commands::Create {
            ref stack,
            ref output,
        }) => {
            let entry = registry::resolve(stack)?;
            let settings = Settings::from_env(output.as_deref())?;

            trace!("Output dir: {}", settings.output_dir().display());
            trace!("Compose command: {}", settings.compose().join(" "));

            println!("Creating stack: {stack}");
            stack::create(
                entry,
                &settings,
                &mut Terminal,
                &Compose::new(settings.compose()),
            )?;
            Ok(())
        }
        Some(Commands::Check { ref stack }) => {
            let entries = match stack {
                Some(name) => vec![registry::resolve(name)?],
                None => CATALOG.iter().collect(),
            };

            let mut undeclared = 0;
            for entry in entries {
                let found = entry.undeclared_placeholders();
                if found.is_empty() {
                    info!("{}: all placeholders declared", entry.key);
                }
                for (path, placeholder) in &found {
                    error!("{}: {path}: undeclared {placeholder}", entry.key);
                }
                undeclared += found.len();
            }

            if undeclared > 0 {
                bail!("{undeclared} undeclared placeholder(s)");
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<autostack::Error>() {
            Some(autostack::Error::Interrupted) => ExitCode::from(INTERRUPTED),
            _ => {
                error!("{e}",);
                ExitCode::FAILURE
            }
        },
    }
}
