// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "shape-editor")]
#[command(about = "Primitive 3D scene editor", long_about = None)]
pub struct Cli {
    /// Hide the editor control overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Shapes to spawn at startup (cube, cylinder or sphere; repeatable)
    #[arg(long = "spawn", value_name = "KIND")]
    pub spawn: Vec<String>,
}
