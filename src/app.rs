use crate::cli::Cli;
use crate::display::SpinnerContainer;

pub struct App {
    pub cli: Cli,
    pub display: SpinnerContainer,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let display = SpinnerContainer::new(cli.no_animate);

        App { cli, display }
    }
}
