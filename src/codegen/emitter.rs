//! Assembly Emitter
//!
//! Accumulates AT&T-syntax lines and keeps a build-time count of how many
//! values the emitted code has left on the machine stack.

use super::CodegenError;
use crate::config::CodegenConfig;

pub struct Emitter {
    output: String,
    indent: String,
    /// Pushes minus pops emitted so far
    depth: i64,
    annotate: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(&CodegenConfig::default())
    }
}

impl Emitter {
    pub fn new(config: &CodegenConfig) -> Self {
        Self {
            output: String::new(),
            indent: " ".repeat(config.indent),
            depth: 0,
            annotate: config.annotate,
        }
    }

    pub fn depth(&self) -> i64 {
        self.depth
    }

    pub fn emit_label(&mut self, label: &str) {
        self.output.push_str(label);
        self.output.push_str(":\n");
    }

    pub fn emit_inst(&mut self, mnemonic: &str, operand: &str) {
        self.output.push_str(&self.indent);
        self.output.push_str(mnemonic);
        if !operand.is_empty() {
            self.output.push(' ');
            self.output.push_str(operand);
        }
        self.output.push('\n');
    }

    /// Emit a directive such as `.global main`, indented like an instruction
    pub fn emit_directive(&mut self, directive: &str, operand: &str) {
        self.emit_inst(directive, operand);
    }

    /// Comment line, only when annotation is enabled
    pub fn emit_comment(&mut self, comment: &str) {
        if !self.annotate {
            return;
        }
        self.output.push_str(&self.indent);
        self.output.push_str("# ");
        self.output.push_str(comment);
        self.output.push('\n');
    }

    pub fn push(&mut self, reg: &str) {
        self.emit_inst("push", reg);
        self.depth += 1;
    }

    pub fn pop(&mut self, reg: &str) {
        self.emit_inst("pop", reg);
        self.depth -= 1;
    }

    /// Hand back the text; every push must have been matched by a pop
    pub fn finish(self) -> Result<String, CodegenError> {
        if self.depth != 0 {
            return Err(CodegenError::UnbalancedStack { depth: self.depth });
        }
        Ok(self.output)
    }
}
