use std::io::{Read, Seek};

use crate::core_api::CoreError;
use crate::reader::ByteCursor;
use crate::text::Latin1Text;

/// Read the `u8`-counted plugin load order in the cursor's current string
/// encoding.
pub fn read_plugin_list<R: Read + Seek>(
    r: &mut ByteCursor<R>,
) -> Result<Vec<Latin1Text>, CoreError> {
    let count = r.read::<u8>()?;
    let mut plugins = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        plugins.push(r.read_string()?);
    }
    Ok(plugins)
}
