//! Record transform kernel: builds a large roster of mutable records up
//! front, mutates every record through two chained operations, then streams
//! each record as one output line in construction order.

use std::fmt::Write as _;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// Records constructed per run.
pub const ROSTER_SIZE: u32 = 10_000;

/// One row in the roster. The id is assigned at construction and never
/// changes afterwards; age and weight are the mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    id: u32,
    age: i32,
    weight: f64,
}

impl Person {
    pub fn new(id: u32, age: i32, weight: f64) -> Self {
        Self { id, age, weight }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Steps age up one year at a time until it reaches 100.
    ///
    /// Deliberately an increment loop rather than `max(age, 100)`: the step
    /// size is an observable unit of work, so seeds far below 100 cost
    /// proportionally more.
    pub fn age_to_hundred(&mut self) -> &mut Self {
        while self.age < 100 {
            self.age += 1;
        }
        self
    }

    /// Adds `amount` to the current weight.
    pub fn gain_weight(&mut self, amount: f64) -> &mut Self {
        self.weight += amount;
        self
    }

    /// Appends the record's single output line to `out`, without the
    /// trailing newline. The weight uses default float display, so an
    /// integral value prints without a fractional part.
    pub fn render(&self, out: &mut String) {
        let mut digits = itoa::Buffer::new();
        out.push_str("Person ");
        out.push_str(digits.format(self.id));
        out.push_str(" - Age: ");
        out.push_str(digits.format(self.age));
        out.push_str(", Weight: ");
        let _ = write!(out, "{}", self.weight);
    }
}

/// Builds the roster with its deterministic seeds: ids count up from 1
/// while age and weight start `id` below their post-transform rest points.
/// Ages go negative once ids pass 100.
pub fn build_roster(size: u32) -> Vec<Person> {
    let mut roster = Vec::with_capacity(size as usize);
    for i in 1..=size {
        roster.push(Person::new(i, 100 - i as i32, f64::from(80_000 - i)));
    }
    roster
}

/// Mutates every record in roster order: age normalization first, then a
/// weight gain equal to the record's own id.
pub fn transform(roster: &mut [Person]) {
    for person in roster.iter_mut() {
        let gain = f64::from(person.id());
        person.age_to_hundred().gain_weight(gain);
    }
}

/// Streams the roster to `out`, one line per record in construction order.
pub fn write_roster<W: Write>(roster: &[Person], out: &mut W) -> Result<()> {
    let mut line = String::new();
    for person in roster {
        line.clear();
        person.render(&mut line);
        line.push('\n');
        out.write_all(line.as_bytes()).context("write roster line")?;
    }
    Ok(())
}

/// Runs the kernel at its fixed workload: build, transform the whole
/// roster, then stream it record by record.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut roster = build_roster(ROSTER_SIZE);
    transform(&mut roster);
    tracing::debug!(records = roster.len(), "roster transformed");
    let mut writer = BufWriter::new(out);
    write_roster(&roster, &mut writer)?;
    writer.flush().context("flush roster output")
}
