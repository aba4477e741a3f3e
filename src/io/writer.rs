//! Text writer for chromosomes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{MdvrpError, MdvrpResult};
use crate::models::Chromosome;

fn write_lines<W: Write>(chromosome: &Chromosome, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} {}",
        chromosome.id(),
        chromosome.fitness(),
        chromosome.capacity()
    )?;
    for depot in chromosome {
        writeln!(writer, "{} {} {}", depot.id(), depot.x(), depot.y())?;
        for c in depot {
            writeln!(
                writer,
                "{} {} {} {} {}",
                c.id(),
                c.x(),
                c.y(),
                c.demand(),
                c.is_separator()
            )?;
        }
    }
    writer.flush()
}

/// Writes a chromosome in the text layout read by
/// [`parse_chromosome`](super::parse_chromosome).
///
/// # Errors
///
/// [`MdvrpError::Io`] if the writer fails.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Chromosome, Customer, Depot};
/// use u_mdvrp::io::write_chromosome;
///
/// let mut depot = Depot::new(51, 20.0, 20.0, 80.0);
/// depot.push(Customer::new(1, 37.0, 52.0, 7.0));
/// depot.push(depot.new_separator());
/// let ch = Chromosome::new(0, 80.0, vec![depot]);
///
/// let mut out = Vec::new();
/// write_chromosome(&ch, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "0 -1 80\n51 20 20\n1 37 52 7 false\n0 20 20 0 true\n"
/// );
/// ```
pub fn write_chromosome<W: Write>(chromosome: &Chromosome, mut writer: W) -> MdvrpResult<()> {
    write_lines(chromosome, &mut writer).map_err(|err| MdvrpError::io("<writer>", err))
}

/// Saves a chromosome to `path`, replacing any existing file.
///
/// # Errors
///
/// [`MdvrpError::Io`] if the file cannot be created or written.
pub fn save_chromosome<P: AsRef<Path>>(chromosome: &Chromosome, path: P) -> MdvrpResult<()> {
    let path = path.as_ref();
    let to_error = |err| MdvrpError::io(path.display().to_string(), err);
    let file = File::create(path).map_err(to_error)?;
    write_lines(chromosome, &mut BufWriter::new(file)).map_err(to_error)?;
    debug!(path = %path.display(), fitness = chromosome.fitness(), "saved chromosome");
    Ok(())
}
