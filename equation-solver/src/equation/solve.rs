use crate::{dbg_display, Domain, Operand};

use super::{Equation, Slot};

/// Solve attempts in priority order: the slot solved for and the domain both
/// known slots must share.
const CASES: [(Slot, Domain); 6] = [
    (Slot::Result, Domain::Floating),
    (Slot::Result, Domain::Rational),
    (Slot::Operand2, Domain::Floating),
    (Slot::Operand1, Domain::Floating),
    (Slot::Operand2, Domain::Rational),
    (Slot::Operand1, Domain::Rational),
];

impl Equation {
    /// Computes the missing slot from the other two.
    ///
    /// Returns `None` when no case applies: fewer than two known slots, known
    /// slots from different domains, or a zero divisor. Both operands being
    /// known always wins, so a present `result` is ignored in that case.
    pub fn solve(&self) -> Option<Operand> {
        let solution = CASES
            .iter()
            .find_map(|&(unknown, domain)| self.solve_case(unknown, domain));
        if solution.is_none() {
            log::debug!("{self}: no solution");
        }
        solution.map(|solution| dbg_display!(solution))
    }

    fn solve_case(&self, unknown: Slot, domain: Domain) -> Option<Operand> {
        let (a, b) = self.known_pair(unknown)?;
        let solution = match domain {
            Domain::Floating => self
                .operation
                .apply(unknown, a.as_floating()?, b.as_floating()?)
                .map(Operand::Floating),
            Domain::Rational => self
                .operation
                .apply(unknown, *a.as_rational()?, *b.as_rational()?)
                .map(Operand::Rational),
        };
        if solution.is_none() {
            log::trace!("{self}: skipping {domain} case for {unknown}");
        }
        solution
    }

    /// The two slots other than `unknown`, in slot order.
    fn known_pair(&self, unknown: Slot) -> Option<(&Operand, &Operand)> {
        match unknown {
            Slot::Result => Some((self.operand1()?, self.operand2()?)),
            Slot::Operand2 => Some((self.operand1()?, self.result()?)),
            Slot::Operand1 => Some((self.operand2()?, self.result()?)),
        }
    }
}
