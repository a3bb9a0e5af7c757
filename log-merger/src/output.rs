use std::io::{self, Write};

/// Writes `content`, treating a closed pipe (`log-merger | head`) as success.
pub fn write_to_output<W: Write>(out: &mut W, content: &[u8]) -> io::Result<()> {
    if let Err(err) = out.write_all(content).and_then(|_| out.flush()) {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        } else {
            return Err(err);
        }
    }
    Ok(())
}
