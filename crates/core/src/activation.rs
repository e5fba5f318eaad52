//! Bulk activate / de-activate of configuration records.

/// Records carrying an `active` flag.
pub trait Activatable {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Flip the `active` flag of every record in the selection.
///
/// Each record is flipped independently, so a mixed selection stays mixed.
/// Returns the number of records changed.
pub fn toggle_active<'a, T, I>(selection: I) -> usize
where
    T: Activatable + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let mut changed = 0;
    for record in selection {
        let active = record.is_active();
        record.set_active(!active);
        changed += 1;
    }
    changed
}
