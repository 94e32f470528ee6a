use sd::mach::{Event, Runtime};

/// Runs a program and renders recorded numbers separated by spaces,
/// followed by `?ERROR` on a new line when the run failed.
pub fn exec(code: &str) -> String {
    exec_n(code, 5000)
}

pub fn exec_n(code: &str, cycles: usize) -> String {
    let mut runtime = Runtime::new(code);
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Error(error) => {
                s.push_str(&format!("\n?{}", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.", cycles));
                    break;
                }
            }
            Event::Trace(..) => {}
        }
        prev_running = event == Event::Running;
    }
    let output: Vec<String> = runtime.output().iter().map(|n| n.to_string()).collect();
    output.join(" ") + &s
}
