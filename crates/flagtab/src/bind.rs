use std::{
    cell::RefCell,
    fmt::Display,
    fs::File,
    io::{self, Write},
    rc::Rc,
    str::FromStr,
};

use crate::Kind;

/// Storage shared between the caller and a registered flag.
#[derive(Clone, Debug, Default)]
pub struct Slot<T>(Rc<RefCell<T>>);

impl<T> Slot<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
}

/// A write target that opens lazily when its flag provides a path.
#[derive(Clone, Debug, Default)]
pub struct Sink(Rc<RefCell<SinkState>>);

#[derive(Debug, Default)]
struct SinkState {
    path: Option<Box<str>>,
    file: Option<File>,
}

impl Sink {
    pub fn is_open(&self) -> bool {
        self.0.borrow().file.is_some()
    }

    pub fn path(&self) -> Option<String> {
        self.0.borrow().path.as_deref().map(str::to_string)
    }

    fn open(&self, path: &str) -> bool {
        match File::create(path) {
            Ok(file) => {
                let mut state = self.0.borrow_mut();
                state.path.replace(path.into());
                state.file.replace(file);
                true
            }
            Err(..) => false,
        }
    }
}

impl Write for Sink {
    // writes made while no file is open are discarded
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.0.borrow_mut().file {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.0.borrow_mut().file {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

// answering true from `wants_value` tells the parser to feed the next token
// to `assign`. the switch flips as soon as its flag is seen, so it answers
// false and `assign` never runs for it.
pub(crate) trait Bind {
    fn wants_value(&mut self) -> bool;
    fn assign(&mut self, raw: &str) -> bool;
    fn kind(&self) -> Kind;
    fn current(&self) -> String;
}

pub(crate) struct Switch(pub(crate) Slot<bool>);

impl Bind for Switch {
    fn wants_value(&mut self) -> bool {
        self.0.set(true);
        false
    }

    fn assign(&mut self, _raw: &str) -> bool {
        true
    }

    fn kind(&self) -> Kind {
        Kind::Switch
    }

    fn current(&self) -> String {
        self.0.get().to_string()
    }
}

pub(crate) struct Text(pub(crate) Slot<String>);

impl Bind for Text {
    fn wants_value(&mut self) -> bool {
        true
    }

    fn assign(&mut self, raw: &str) -> bool {
        self.0.set(raw.to_string());
        true
    }

    fn kind(&self) -> Kind {
        Kind::Text
    }

    fn current(&self) -> String {
        self.0.get()
    }
}

pub(crate) struct Value<T>(pub(crate) Slot<T>);

impl<T> Bind for Value<T>
where
    T: FromStr + Display + Clone,
{
    fn wants_value(&mut self) -> bool {
        true
    }

    // bad input keeps the previous value
    fn assign(&mut self, raw: &str) -> bool {
        match raw.parse() {
            Ok(value) => {
                self.0.set(value);
                true
            }
            Err(..) => false,
        }
    }

    fn kind(&self) -> Kind {
        Kind::Value
    }

    fn current(&self) -> String {
        self.0.get().to_string()
    }
}

pub(crate) struct SinkBind(pub(crate) Sink);

impl Bind for SinkBind {
    fn wants_value(&mut self) -> bool {
        true
    }

    fn assign(&mut self, raw: &str) -> bool {
        self.0.open(raw)
    }

    fn kind(&self) -> Kind {
        Kind::Sink
    }

    fn current(&self) -> String {
        self.0.path().unwrap_or_default()
    }
}
