use crate::error::Result;

use super::system::System;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ColumnSwap { column_one: usize, column_two: usize },
}

impl Command {
    pub fn execute(&self, system: &mut System) -> Result<()> {
        match *self {
            Command::ColumnSwap {
                column_one,
                column_two,
            } => system.swap_columns(column_one, column_two),
        }
    }

    pub fn undo(&self, system: &mut System) -> Result<()> {
        match *self {
            // a swap is its own inverse
            Command::ColumnSwap {
                column_one,
                column_two,
            } => system.swap_columns(column_two, column_one),
        }
    }
}

#[derive(Debug, Default)]
pub struct CommandLog {
    executed: Vec<Command>,
}

impl CommandLog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.executed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executed.is_empty()
    }

    pub fn executed(&self) -> &[Command] {
        &self.executed
    }

    pub fn execute(&mut self, command: Command, system: &mut System) -> Result<()> {
        command.execute(system)?;
        log::debug!("executed {command:?}");
        self.executed.push(command);
        Ok(())
    }

    pub fn undo_last(&mut self, system: &mut System) -> Result<Option<Command>> {
        let Some(command) = self.executed.pop() else {
            return Ok(None);
        };
        command.undo(system)?;
        log::debug!("undid {command:?}");
        Ok(Some(command))
    }

    pub fn undo_all(&mut self, system: &mut System) -> Result<()> {
        while self.undo_last(system)?.is_some() {}
        Ok(())
    }
}
