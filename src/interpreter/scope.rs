//! Scope stack for the interpreter.
//!
//! Frame 0 is the program's global frame: it is created with the stack and never popped. Every
//! `if`/`else` block pushes one frame on entry and pops it on exit; a function call hides the
//! frames above the function's defining frame and pushes one frame for its parameters and body.
//!
//! A frame binds a name either to a variable cell or to a function, never both: declaring one
//! kind removes the other from that frame.

use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::FunctionDecl;

use super::value::Value;

#[derive(Debug, Default)]
pub struct Frame {
    values: HashMap<String, Value>,
    functions: HashMap<String, Rc<FunctionDecl>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: &str, value: Value) {
        self.functions.remove(name);
        self.values.insert(name.to_string(), value);
    }

    pub fn bind_function(&mut self, name: &str, function: Rc<FunctionDecl>) {
        self.values.remove(name);
        self.functions.insert(name.to_string(), function);
    }

    fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name) || self.functions.contains_key(name)
    }
}

/// Frames hidden for the duration of a call; hand back to [`ScopeStack::restore`].
#[derive(Debug)]
#[must_use]
pub struct HiddenFrames {
    keep: usize,
    frames: Vec<Frame>,
}

#[derive(Debug)]
pub struct ScopeStack {
    frames: Vec<Frame>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self {
            frames: vec![Frame::new()],
        }
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames, including the global frame.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self) {
        self.push_frame(Frame::new());
    }

    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
        tracing::trace!(depth = self.frames.len(), "push frame");
    }

    /// Pop the innermost frame. The global frame is never popped.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
            tracing::trace!(depth = self.frames.len(), "pop frame");
        }
    }

    /// Bind a variable in the innermost frame.
    pub fn declare(&mut self, name: &str, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.bind(name, value);
        }
    }

    /// Bind a function in the innermost frame.
    pub fn declare_function(&mut self, name: &str, function: Rc<FunctionDecl>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.bind_function(name, function);
        }
    }

    /// Innermost frame that binds `name` as anything.
    fn resolve(&self, name: &str) -> Option<usize> {
        self.frames.iter().rposition(|frame| frame.contains(name))
    }

    /// Value of the variable `name`, searching from the innermost frame outwards.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let index = self.resolve(name)?;
        self.frames[index].values.get(name).copied()
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Value> {
        let index = self.resolve(name)?;
        self.frames[index].values.get_mut(name)
    }

    /// The function `name` together with the index of the frame that defines it.
    pub fn function(&self, name: &str) -> Option<(usize, Rc<FunctionDecl>)> {
        let index = self.resolve(name)?;
        self.frames[index]
            .functions
            .get(name)
            .map(|function| (index, Rc::clone(function)))
    }

    /// Detach every frame above `index` so only frames `0..=index` stay visible.
    pub fn hide_above(&mut self, index: usize) -> HiddenFrames {
        let keep = (index + 1).min(self.frames.len());
        HiddenFrames {
            keep,
            frames: self.frames.split_off(keep),
        }
    }

    /// Drop whatever was pushed since [`hide_above`](Self::hide_above) and reattach the hidden frames.
    pub fn restore(&mut self, hidden: HiddenFrames) {
        self.frames.truncate(hidden.keep);
        self.frames.extend(hidden.frames);
    }

    /// Variable in the global frame.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.frames.first().and_then(|frame| frame.values.get(name).copied())
    }

    /// All variables of the global frame, sorted by name.
    pub fn globals(&self) -> Vec<(String, Value)> {
        let mut globals: Vec<(String, Value)> = self
            .frames
            .first()
            .map(|frame| frame.values.iter().map(|(k, v)| (k.clone(), *v)).collect())
            .unwrap_or_default();
        globals.sort_by(|a, b| a.0.cmp(&b.0));
        globals
    }
}
