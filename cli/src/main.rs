use clap::Parser;
use color_eyre::eyre::Result;
use tinsel::{App, Args};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let app = App::from_args(args)?;
    tinsel::init_logging(&app.log_filter);

    app.run(&mut std::io::stdout().lock())
}
