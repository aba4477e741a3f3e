//! Text readers for Cordeau instances, result files, and saved chromosomes.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{MdvrpError, MdvrpResult};
use crate::models::{Chromosome, Customer, Depot};

/// A loaded problem instance: depots with their capacities and the
/// customers to serve.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Depots in file order, with empty sequences.
    pub depots: Vec<Depot>,
    /// Customers in file order.
    pub customers: Vec<Customer>,
}

/// Numbered, whitespace-split lines with blank lines skipped.
struct LineSource<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> LineSource<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_fields(&mut self) -> MdvrpResult<Option<(usize, Vec<String>)>> {
        for next in self.lines.by_ref() {
            self.line += 1;
            let text = next.map_err(|err| MdvrpError::parse(self.line, err.to_string()))?;
            let fields: Vec<String> = text.split_whitespace().map(str::to_string).collect();
            if !fields.is_empty() {
                return Ok(Some((self.line, fields)));
            }
        }
        Ok(None)
    }

    fn expect_fields(&mut self, what: &str) -> MdvrpResult<(usize, Vec<String>)> {
        self.next_fields()?
            .ok_or_else(|| MdvrpError::parse(self.line + 1, format!("unexpected end of input, expected {what}")))
    }
}

fn field<T: FromStr>(fields: &[String], index: usize, line: usize, name: &str) -> MdvrpResult<T> {
    let raw = fields
        .get(index)
        .ok_or_else(|| MdvrpError::parse(line, format!("missing {name} (column {})", index + 1)))?;
    raw.parse()
        .map_err(|_| MdvrpError::parse(line, format!("invalid {name} '{raw}'")))
}

/// Parses a Cordeau-format instance.
///
/// Line 1 holds `type vehicles customers depots`. It is followed by one
/// `duration capacity` line per depot, one `id x y duration demand ...` line
/// per customer, and one `id x y ...` line per depot, paired with the
/// capacities by position.
///
/// # Errors
///
/// [`MdvrpError::Parse`] on a missing line or a malformed field.
///
/// # Examples
///
/// ```
/// use u_mdvrp::io::parse_instance;
///
/// let text = "\
/// 2 4 3 2
///   0  80
///   0  80
///  1 37 52 0  7 1 4 1 2 4 8
///  2 49 49 0 30 1 4 1 2 4 8
///  3 52 64 0 16 1 4 1 2 4 8
///  4 20 20 0 0 0 0
///  5 30 40 0 0 0 0
/// ";
/// let instance = parse_instance(text.as_bytes()).unwrap();
/// assert_eq!(instance.customers.len(), 3);
/// assert_eq!(instance.depots[1].id(), 5);
/// assert_eq!(instance.depots[1].capacity(), 80.0);
/// assert_eq!(instance.customers[1].demand(), 30.0);
/// ```
pub fn parse_instance<R: BufRead>(reader: R) -> MdvrpResult<Instance> {
    let mut source = LineSource::new(reader);

    let (line, header) = source.expect_fields("header line")?;
    let customer_count: usize = field(&header, 2, line, "customer count")?;
    let depot_count: usize = field(&header, 3, line, "depot count")?;

    let mut capacities = Vec::with_capacity(depot_count);
    for _ in 0..depot_count {
        let (line, fields) = source.expect_fields("depot capacity line")?;
        capacities.push(field::<f64>(&fields, 1, line, "capacity")?);
    }

    let mut customers = Vec::with_capacity(customer_count);
    for _ in 0..customer_count {
        let (line, fields) = source.expect_fields("customer line")?;
        customers.push(Customer::new(
            field(&fields, 0, line, "customer id")?,
            field(&fields, 1, line, "x")?,
            field(&fields, 2, line, "y")?,
            field(&fields, 4, line, "demand")?,
        ));
    }

    let mut depots = Vec::with_capacity(depot_count);
    for capacity in capacities {
        let (line, fields) = source.expect_fields("depot coordinate line")?;
        depots.push(Depot::new(
            field(&fields, 0, line, "depot id")?,
            field(&fields, 1, line, "x")?,
            field(&fields, 2, line, "y")?,
            capacity,
        ));
    }

    debug!(depots = depots.len(), customers = customers.len(), "parsed instance");
    Ok(Instance { depots, customers })
}

/// Reads a Cordeau-format instance file.
///
/// # Errors
///
/// [`MdvrpError::Io`] if the file cannot be opened, otherwise as
/// [`parse_instance`].
pub fn read_instance<P: AsRef<Path>>(path: P) -> MdvrpResult<Instance> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| MdvrpError::io(path.display().to_string(), err))?;
    let instance = parse_instance(BufReader::new(file))?;
    info!(
        path = %path.display(),
        depots = instance.depots.len(),
        customers = instance.customers.len(),
        "loaded instance"
    );
    Ok(instance)
}

/// Reads the best-known cost from a result file: its first numeric token.
///
/// # Errors
///
/// [`MdvrpError::Io`] if the file cannot be read, [`MdvrpError::Parse`] if
/// it does not start with a number.
pub fn read_best_known<P: AsRef<Path>>(path: P) -> MdvrpResult<f64> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| MdvrpError::io(path.display().to_string(), err))?;
    let mut source = LineSource::new(BufReader::new(file));
    let (line, fields) = source.expect_fields("best-known cost")?;
    field(&fields, 0, line, "best-known cost")
}

/// Parses a chromosome written by [`write_chromosome`](super::write_chromosome).
///
/// The first line is `id fitness capacity`. Each 3-field line opens a depot
/// (`id x y`), and each 5-field line appends an entry
/// (`id x y demand is_separator`) to the current depot. Loaded entries get
/// fresh identity keys.
///
/// # Errors
///
/// [`MdvrpError::Parse`] on a malformed line, an entry before any depot
/// header, or a line with an unexpected field count.
pub fn parse_chromosome<R: BufRead>(reader: R) -> MdvrpResult<Chromosome> {
    let mut source = LineSource::new(reader);

    let (line, header) = source.expect_fields("chromosome header")?;
    let id: usize = field(&header, 0, line, "chromosome id")?;
    let fitness: f64 = field(&header, 1, line, "fitness")?;
    let capacity: f64 = field(&header, 2, line, "capacity")?;

    let mut depots: Vec<Depot> = Vec::new();
    while let Some((line, fields)) = source.next_fields()? {
        match fields.len() {
            3 => depots.push(Depot::new(
                field(&fields, 0, line, "depot id")?,
                field(&fields, 1, line, "x")?,
                field(&fields, 2, line, "y")?,
                capacity,
            )),
            5 => {
                let entry = Customer::from_parts(
                    field(&fields, 0, line, "customer id")?,
                    field(&fields, 1, line, "x")?,
                    field(&fields, 2, line, "y")?,
                    field(&fields, 3, line, "demand")?,
                    field(&fields, 4, line, "separator flag")?,
                );
                depots
                    .last_mut()
                    .ok_or_else(|| MdvrpError::parse(line, "entry before any depot header"))?
                    .push(entry);
            }
            n => {
                return Err(MdvrpError::parse(
                    line,
                    format!("expected 3 or 5 fields, found {n}"),
                ))
            }
        }
    }

    let mut chromosome = Chromosome::new(id, capacity, depots);
    chromosome.set_fitness(fitness);
    Ok(chromosome)
}

/// Loads a chromosome file written by [`save_chromosome`](super::save_chromosome).
///
/// # Errors
///
/// [`MdvrpError::Io`] if the file cannot be opened, otherwise as
/// [`parse_chromosome`].
pub fn load_chromosome<P: AsRef<Path>>(path: P) -> MdvrpResult<Chromosome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| MdvrpError::io(path.display().to_string(), err))?;
    let chromosome = parse_chromosome(BufReader::new(file))?;
    debug!(path = %path.display(), depots = chromosome.len(), "loaded chromosome");
    Ok(chromosome)
}
