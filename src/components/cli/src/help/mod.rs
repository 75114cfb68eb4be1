mod invoke;

#[derive(Clone, Debug)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn parse(_args: impl Iterator<Item = String>) -> Result<Self, ()> {
        Ok(Self)
    }
}
