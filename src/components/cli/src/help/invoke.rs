use super::HelpCommand;
use crate::Invoke;
use indoc::indoc;

impl Invoke for HelpCommand {
    fn invoke(self) -> Result<(), ()> {
        print!(
            "{}",
            indoc! {"
            usage: cshape [classify] [OPTIONS] FILENAME

            Groups the members of every struct and union in FILENAME by the type they share.

            options:
              --emit groups|c         print one line per group (default) or one C declaration per group
              --members               print the members of each record instead of grouping them
              --no-warn-duplicates    don't warn about anonymous aggregates with repeated layouts
              --strict                stop at the first invalid record instead of skipping it
              -h, --help              show this message
        "}
        );
        Err(())
    }
}
