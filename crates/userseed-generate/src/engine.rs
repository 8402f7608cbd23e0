use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rand::Rng;

use userseed_core::UserCount;

use crate::errors::GenerationError;
use crate::fixtures;
use crate::model::{Progress, ScriptReport};
use crate::output::CountingWriter;
use crate::sql::{Statement, insert_account, insert_location, insert_user};

/// Writes one shared location followed by `count` account and user pairs.
///
/// Each statement ends with a semicolon and every block is followed by a
/// blank line. `progress` runs after each user pair is written; an error
/// from it aborts the script where it stands.
pub fn generate_script<W, R, F>(
    writer: W,
    count: UserCount,
    rng: &mut R,
    mut progress: F,
) -> Result<ScriptReport, GenerationError>
where
    W: Write,
    R: Rng,
    F: FnMut(Progress) -> io::Result<()>,
{
    let total = count.get();
    let mut writer = CountingWriter::new(writer);

    tracing::info!(event = "script_started", users = total);

    let location = fixtures::location(rng);
    let key = location.key();
    write_statement(&mut writer, &insert_location(&location))?;
    writeln!(writer)?;
    tracing::debug!(
        event = "location_written",
        street_number = location.street_number,
        street_name = %location.street_name
    );

    for current in 1..=total {
        let account = fixtures::account(rng);
        let user = fixtures::user_profile(rng);
        write_statement(&mut writer, &insert_account(&account))?;
        write_statement(&mut writer, &insert_user(&user, &account, &key))?;
        writeln!(writer)?;
        progress(Progress { current, total })?;
    }

    writer.flush()?;
    let bytes_written = writer.bytes_written();

    tracing::info!(
        event = "script_finished",
        users = total,
        bytes_written = bytes_written
    );

    Ok(ScriptReport {
        user_count: total,
        location_statements: 1,
        account_statements: total,
        user_statements: total,
        bytes_written,
        location,
    })
}

/// Truncates `path` and writes the script into it. A failure midway leaves
/// the partial script on disk.
pub fn write_script_file<R, F>(
    path: &Path,
    count: UserCount,
    rng: &mut R,
    progress: F,
) -> Result<ScriptReport, GenerationError>
where
    R: Rng,
    F: FnMut(Progress) -> io::Result<()>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let report = generate_script(BufWriter::new(file), count, rng, progress)?;
    tracing::info!(event = "script_written", path = %path.display());
    Ok(report)
}

fn write_statement<W: Write>(writer: &mut W, statement: &Statement) -> Result<(), GenerationError> {
    let rendered = statement.render()?;
    writeln!(writer, "{rendered}")?;
    Ok(())
}
