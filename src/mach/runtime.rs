use super::{Address, Number, Operation, Program, Stack, Val};
use crate::error;
use crate::lang::token::Word;
use crate::lang::{Error, Token};
use std::collections::HashMap;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime
///
/// One instance owns a program and every piece of state it touches.
/// Nothing is shared between runs.

pub struct Runtime {
    program: Program,
    pc: Address,
    stack: Stack<Val>,
    calls: Stack<Address>,
    subroutines: HashMap<char, Address>,
    register: Number,
    output: Vec<Number>,
    state: State,
    tron: bool,
}

/// ## Events for the user interface

#[derive(Debug, PartialEq)]
pub enum Event {
    /// The cycle budget ran out and the program is still live.
    Running,
    /// The program ended normally, or was never started.
    Stopped,
    Error(Error),
    /// An instruction at this address was executed while tracing.
    Trace(Address, Token),
}

#[derive(Debug, PartialEq)]
enum State {
    Live,
    Interrupted,
    Stopped,
}

/// What the loop does after an instruction.
#[derive(Debug, PartialEq)]
enum Flow {
    /// Default advance by one.
    Advance,
    /// The program counter was set and must not be advanced.
    Jumped,
    /// Normal termination.
    Stop,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new("")
    }
}

impl Runtime {
    pub fn new(code: &str) -> Runtime {
        Runtime {
            program: Program::new(code),
            pc: 0,
            stack: Stack::new("DATA STACK FULL"),
            calls: Stack::new("CALL STACK FULL"),
            subroutines: HashMap::new(),
            register: 0,
            output: vec![],
            state: State::Live,
            tron: false,
        }
    }

    /// Replace the program and reset all state. Tracing is kept.
    pub fn enter(&mut self, code: &str) {
        self.program = Program::new(code);
        self.pc = 0;
        self.stack.clear();
        self.calls.clear();
        self.subroutines.clear();
        self.register = 0;
        self.output.clear();
        self.state = State::Live;
    }

    pub fn tron(&mut self, on: bool) {
        self.tron = on;
    }

    pub fn interrupt(&mut self) {
        if self.state == State::Live {
            self.state = State::Interrupted;
        }
    }

    pub fn output(&self) -> &[Number] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<Number> {
        std::mem::take(&mut self.output)
    }

    pub fn register(&self) -> Number {
        self.register
    }

    pub fn stack(&self) -> &Stack<Val> {
        &self.stack
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    /// Run at most `cycles` instructions.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.state {
            State::Live => {}
            State::Stopped => return Event::Stopped,
            State::Interrupted => {
                self.state = State::Stopped;
                return Event::Error(error!(Break, self.pc));
            }
        }
        for _ in 0..cycles {
            let pc = self.pc;
            let token = match self.program.get(pc) {
                Some(token) => token,
                None => {
                    self.state = State::Stopped;
                    return Event::Stopped;
                }
            };
            match self.dispatch(token) {
                Ok(Flow::Advance) => self.pc += 1,
                Ok(Flow::Jumped) => {}
                Ok(Flow::Stop) => {
                    self.state = State::Stopped;
                    return Event::Stopped;
                }
                Err(error) => {
                    self.state = State::Stopped;
                    return Event::Error(error.at(pc));
                }
            }
            if self.tron {
                return Event::Trace(pc, token);
            }
        }
        Event::Running
    }

    fn dispatch(&mut self, token: Token) -> Result<Flow> {
        match token {
            Token::Unknown(_) => {}
            Token::Digit(n) => self.stack.push(Val::Number(n as Number))?,
            Token::Symbol(s) => self.stack.push(Val::Symbol(s))?,
            Token::BlockOpen => {
                self.stack.push(Val::Block(self.pc))?;
                match self.program.skip(self.pc) {
                    Some(close) => self.pc = close,
                    None => return Ok(Flow::Stop),
                }
            }
            Token::Return => {
                if self.calls.is_empty() {
                    return Ok(Flow::Stop);
                }
                self.pc = self.calls.pop()?;
            }
            Token::Word(word) => return self.word(word),
        }
        Ok(Flow::Advance)
    }

    fn word(&mut self, word: Word) -> Result<Flow> {
        use Word::*;
        match word {
            Define => {
                let name = self.stack.pop()?.symbol()?;
                let start = self.stack.pop()?.block()?;
                self.subroutines.insert(name, start);
            }
            Add => self.arithmetic(Operation::sum)?,
            Subtract => self.arithmetic(Operation::subtract)?,
            Multiply => self.arithmetic(Operation::multiply)?,
            Divide => self.arithmetic(Operation::divide)?,
            Jump => {
                let target = self.stack.pop()?;
                return self.jump(target);
            }
            Call => {
                let name = self.stack.pop()?.symbol()?;
                self.call(name)?;
            }
            BranchCall => {
                let if_false = self.stack.pop()?.symbol()?;
                let if_true = self.stack.pop()?.symbol()?;
                let condition = self.stack.pop()?.number()?;
                self.call(if condition != 0 { if_true } else { if_false })?;
            }
            BranchJump => {
                let if_false = self.stack.pop()?;
                let if_true = self.stack.pop()?;
                let condition = self.stack.pop()?.number()?;
                return self.jump(if condition != 0 { if_true } else { if_false });
            }
            Record => {
                let val = self.stack.peek()?.number()?;
                self.output.push(val);
            }
            Drop => {
                self.stack.pop()?;
            }
            Duplicate => {
                let val = *self.stack.peek()?;
                self.stack.push(val)?;
            }
            Swap => {
                let a = self.stack.pop()?;
                let b = self.stack.pop()?;
                self.stack.push(a)?;
                self.stack.push(b)?;
            }
            Mark => {
                let depth = self.stack.len() as Number;
                self.stack.push(Val::Number(depth))?;
            }
            Load => {
                let index = self.index()?;
                let val = match self.stack.get_inclusive(index)? {
                    Some(val) => *val,
                    None => Val::Empty,
                };
                self.stack.push(val)?;
            }
            Store => {
                let val = self.stack.pop()?;
                let index = self.index()?;
                self.stack.set(index, val)?;
            }
            Exchange => {
                let val = self.stack.pop()?.number()?;
                self.stack.push(Val::Number(self.register))?;
                self.register = val;
            }
            Halt => return Ok(Flow::Stop),
        }
        Ok(Flow::Advance)
    }

    fn arithmetic(&mut self, op: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(op(lhs, rhs)?)
    }

    fn index(&mut self) -> Result<usize> {
        let index = self.stack.pop()?.number()?;
        usize::try_from(index).map_err(|_| error!(StateError; "NEGATIVE INDEX"))
    }

    fn resolve(&self, name: char) -> Result<Address> {
        match self.subroutines.get(&name) {
            Some(addr) => Ok(*addr),
            None => Err(error!(SubroutineError)),
        }
    }

    /// Enters the subroutine at its `{`; the default advance lands on the body.
    fn call(&mut self, name: char) -> Result<()> {
        let target = self.resolve(name)?;
        self.calls.push(self.pc)?;
        self.pc = target;
        Ok(())
    }

    fn jump(&mut self, target: Val) -> Result<Flow> {
        match target {
            Val::Number(offset) => Ok(self.relative(offset)),
            Val::Symbol(name) => {
                self.pc = self.resolve(name)?;
                Ok(Flow::Advance)
            }
            Val::Block(_) | Val::Empty => Err(error!(TypeError)),
        }
    }

    fn relative(&mut self, offset: Number) -> Flow {
        let target = (self.pc as Number)
            .checked_add(offset)
            .and_then(|addr| Address::try_from(addr).ok());
        match target {
            Some(addr) => {
                self.pc = addr;
                Flow::Jumped
            }
            None => Flow::Stop,
        }
    }
}
