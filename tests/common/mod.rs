use trs80::mach::{Event, Runtime};

#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Runs until the machine stops or asks for input, collecting output.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::List(ls) => {
                s.push_str(&format!("{}\n", ls));
            }
            Event::Cls => s.push_str("<CLS>"),
            Event::Locate(row, col) => s.push_str(&format!("<{},{}>", row, col)),
            Event::Load(path) | Event::Merge(path) | Event::Save(path) => {
                s.push_str(&format!("<{}>", path));
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

/// Enters each line without running anything in between.
#[allow(dead_code)]
pub fn enter(runtime: &mut Runtime, lines: &[&str]) {
    for line in lines {
        runtime.enter(line);
    }
}
