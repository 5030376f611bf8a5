use std::{collections::BTreeMap, fmt::Display, io::Write, str::FromStr};

use crate::{
    bind::{Bind, SinkBind, Switch, Text, Value},
    Error, Kind, Sink, Slot,
};

#[derive(Default)]
pub struct Options {
    flags: BTreeMap<String, Box<dyn Bind>>,
}

impl Options {
    pub fn switch<N>(&mut self, name: N, slot: &Slot<bool>)
    where
        N: Into<String>,
    {
        self.insert(name, Switch(slot.clone()))
    }

    pub fn text<N>(&mut self, name: N, slot: &Slot<String>)
    where
        N: Into<String>,
    {
        self.insert(name, Text(slot.clone()))
    }

    pub fn value<N, T>(&mut self, name: N, slot: &Slot<T>)
    where
        N: Into<String>,
        T: FromStr + Display + Clone + 'static,
    {
        self.insert(name, Value(slot.clone()))
    }

    pub fn sink<N>(&mut self, name: N, sink: &Sink)
    where
        N: Into<String>,
    {
        self.insert(name, SinkBind(sink.clone()))
    }

    // names are taken as-is, a reused one replaces the old binding
    fn insert<N, B>(&mut self, name: N, bind: B)
    where
        N: Into<String>,
        B: Bind + 'static,
    {
        self.flags.insert(name.into(), Box::new(bind));
    }

    pub fn kind(&self, name: &str) -> Option<Kind> {
        self.flags.get(name).map(|bind| bind.kind())
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, String, Kind)> + '_ {
        self.flags
            .iter()
            .map(|(name, bind)| (name.as_str(), bind.current(), bind.kind()))
    }

    /// Walks `args` from index 1, mutating bound slots, and returns the
    /// index of the first positional argument.
    pub fn parse<S>(&mut self, args: &[S]) -> usize
    where
        S: AsRef<str>,
    {
        let mut i = 1;
        while i < args.len() {
            // anything without the prefix is the first positional argument
            let name = match args[i].as_ref().strip_prefix('-') {
                Some(name) => name,
                None => break,
            };

            // unknown flags are skipped without consuming a value
            if let Some(bind) = self.flags.get_mut(name) {
                if bind.wants_value() && i + 1 < args.len() {
                    i += 1;
                    bind.assign(args[i].as_ref());
                }
                // a value flag in the last position consumes nothing and its
                // slot stays put; try_parse reports it instead
            }

            i += 1;
        }
        i
    }

    /// Same walk as `parse`, except the first failure aborts it.
    pub fn try_parse<S>(&mut self, args: &[S]) -> Result<usize, Error>
    where
        S: AsRef<str>,
    {
        let mut i = 1;
        while i < args.len() {
            let name = match args[i].as_ref().strip_prefix('-') {
                Some(name) => name,
                None => break,
            };

            let bind = self
                .flags
                .get_mut(name)
                .ok_or_else(|| Error::Unknown(name.to_string()))?;

            if bind.wants_value() {
                if i + 1 == args.len() {
                    return Err(Error::Missing(name.to_string()));
                }
                i += 1;
                let raw = args[i].as_ref();
                if !bind.assign(raw) {
                    return Err(Error::Value {
                        flag: name.to_string(),
                        value: raw.to_string(),
                    });
                }
            }

            i += 1;
        }
        Ok(i)
    }

    pub fn print<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        writeln!(out, "option\tvalue\ttype")?;
        for (name, value, kind) in self.entries() {
            writeln!(out, "{}\t{}\t{}", name, value, kind)?;
        }
        Ok(())
    }
}
