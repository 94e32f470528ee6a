use crate::error;
use crate::lang::{Error, ErrorCode};
use crate::mach::{Event, Runtime};

mod stack_test;

fn run(runtime: &mut Runtime) -> Result<Vec<i64>, Error> {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> Result<Vec<i64>, Error> {
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => return Ok(runtime.output().to_vec()),
            Event::Error(error) => return Err(error),
            Event::Running => {
                return Err(error!(InternalError; "EXECUTION CYCLES EXCEEDED"));
            }
            Event::Trace(..) => {}
        }
    }
}

fn code_of(result: Result<Vec<i64>, Error>) -> ErrorCode {
    result.unwrap_err().code()
}
