mod config;
use config::Config;

use flagtab::{Options, Sink, Slot};

use std::io::Write;

fn init_logger() -> anyhow::Result<()> {
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from(&[".env", ".env.dev"]);
    init_logger()?;

    let config = Config::load();

    // -m text, -n repeat count, -S shout, -o record file
    let message = Slot::new(config.defaults.message);
    let count = Slot::new(config.defaults.count);
    let shout = Slot::new(config.defaults.shout);
    let mut record = Sink::default();

    let mut opts = Options::default();
    opts.text("m", &message);
    opts.value("n", &count);
    opts.switch("S", &shout);
    opts.sink("o", &record);

    let args = std::env::args().collect::<Vec<_>>();
    let rest = opts.parse(&args);
    log::debug!("flags consumed {} of {} arguments", rest, args.len());
    if rest < args.len() {
        log::warn!("ignoring positional arguments: {:?}", &args[rest..]);
    }

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    opts.print(&mut stdout)?;
    writeln!(stdout)?;

    let mut line = message.get();
    if shout.get() {
        line.make_ascii_uppercase();
    }

    for _ in 0..count.get() {
        writeln!(stdout, "{}", line)?;
        writeln!(record, "{}", line)?;
    }
    record.flush()?;

    if let Some(path) = record.path() {
        log::info!("recorded to '{}'", path);
    }

    Ok(())
}
