#[derive(Default, Clone, Debug, serde::Deserialize)]
pub struct Config {
    pub defaults: Defaults,
}

#[derive(Default, Clone, Debug, serde::Deserialize)]
pub struct Defaults {
    pub message: String,
    pub count: u32,
    pub shout: bool,
}

impl Config {
    pub fn load() -> Self {
        match Self::load_from_file() {
            Ok(config) => config,
            Err(..) => Self::write_default(),
        }
    }

    fn load_from_file() -> anyhow::Result<Self> {
        let data = std::fs::read_to_string("flagtab.toml")?;
        toml::from_str(&data).map_err(Into::into)
    }

    fn write_default() -> ! {
        eprintln!("cannot load config. creating a default at 'flagtab.toml.example'");
        eprintln!("copy it to 'flagtab.toml' and edit it then rerun");

        let data = toml::toml! {
            [defaults]
            message = "hello world"
            count = 3
            shout = false
        };
        let data = toml::to_string_pretty(&data).unwrap();
        std::fs::write("flagtab.toml.example", &data).unwrap();

        std::process::exit(1);
    }
}
