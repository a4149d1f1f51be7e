use crate::cpu::op::StackPair;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, pair: StackPair) {
        let value = self.regs.get_stack_pair(pair);
        self.push_u16(bus, value);
    }

    /// POP AF drops the low nibble of F along the way.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, pair: StackPair) {
        let value = self.pop_u16(bus);
        self.regs.set_stack_pair(pair, value);
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, target: u16) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = target;
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
    }
}
