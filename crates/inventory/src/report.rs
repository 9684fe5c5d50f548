//! Plain-text stock report.

use std::io::{self, Write};

use crate::store::InventoryStore;

impl InventoryStore {
    /// Write `Items Report:` followed by one `<item> -> <quantity>` line per item.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Items Report:")?;
        for (item, qty) in self.iter() {
            writeln!(out, "{item} -> {qty}")?;
        }
        Ok(())
    }

    /// Print the report to standard output.
    pub fn report(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // A closed stdout is not an inventory failure.
        let _ = self.write_report(&mut out);
    }
}
