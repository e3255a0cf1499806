use modbundle::config::Config;
use modbundle::core::path::{config_file, modbundle_home, registry_file};
use modbundle::core::BundleResult;

pub fn show() -> BundleResult<()> {
    let config = Config::load()?;

    println!("# {}", config_file()?.display());
    print!("{}", serde_yaml::to_string(&config)?);
    println!("# output directory: {}", config.get_output_dir()?.display());

    Ok(())
}

pub fn path() -> BundleResult<()> {
    println!("Home:     {}", modbundle_home()?.display());
    println!("Config:   {}", config_file()?.display());
    println!("Mod list: {}", registry_file()?.display());
    Ok(())
}
