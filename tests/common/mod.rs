use lr35902_registers::{assignment::Assignment, RegisterFile};

/// Builds a zeroed register file and applies each `NAME=VALUE` write in order.
pub fn registers_after(assignments: &[&str]) -> RegisterFile {
    let mut registers = RegisterFile::new();
    for text in assignments {
        let assignment: Assignment = text
            .parse()
            .unwrap_or_else(|e| panic!("bad assignment {:?}: {}", text, e));
        assignment.apply(&mut registers);
    }
    registers
}
