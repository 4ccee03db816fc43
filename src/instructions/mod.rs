//! # 6510 Instruction Implementations
//!
//! This module contains the implementations of all executable instructions,
//! organized by category. Each instruction is implemented as a standalone
//! function that takes a mutable reference to the CPU and the opcode byte,
//! and looks up its addressing mode in the opcode table.
//!
//! Every handler consumes its own opcode and operand bytes and leaves PC on
//! the next instruction (or the jump/branch target). JAM is the one handler
//! that leaves PC where it was.
//!
//! ## Categories
//!
//! - **alu**: Bitwise operations (AND, ORA, EOR, BIT)
//! - **compare**: Register comparisons (CMP, CPX, CPY)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **inc_dec**: Index register increment and decrement (INX, INY, DEX, DEY)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **control**: Control flow instructions (JMP, JSR, RTS, BRK, NOP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **illegal**: Undocumented opcodes (JAM, SLO)

pub mod alu;
pub mod branches;
pub mod compare;
pub mod control;
pub mod flags;
pub mod illegal;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{ExecutionError, MemoryBus, Operation, CPU};

/// Dispatches one decoded opcode to its handler.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operation: Operation,
    opcode: u8,
) -> Result<(), ExecutionError> {
    use Operation::*;

    match operation {
        Ora => alu::execute_ora(cpu, opcode),
        And => alu::execute_and(cpu, opcode),
        Eor => alu::execute_eor(cpu, opcode),
        Bit => alu::execute_bit(cpu, opcode),

        Asl => shifts::execute_asl(cpu, opcode),
        Lsr => shifts::execute_lsr(cpu, opcode),
        Rol => shifts::execute_rol(cpu, opcode),
        Ror => shifts::execute_ror(cpu, opcode),

        Cmp => compare::execute_cmp(cpu, opcode),
        Cpx => compare::execute_cpx(cpu, opcode),
        Cpy => compare::execute_cpy(cpu, opcode),

        Lda => load_store::execute_lda(cpu, opcode),
        Ldx => load_store::execute_ldx(cpu, opcode),
        Ldy => load_store::execute_ldy(cpu, opcode),
        Sta => load_store::execute_sta(cpu, opcode),
        Stx => load_store::execute_stx(cpu, opcode),
        Sty => load_store::execute_sty(cpu, opcode),

        Tax => transfer::execute_tax(cpu, opcode),
        Tay => transfer::execute_tay(cpu, opcode),
        Txa => transfer::execute_txa(cpu, opcode),
        Tya => transfer::execute_tya(cpu, opcode),
        Tsx => transfer::execute_tsx(cpu, opcode),
        Txs => transfer::execute_txs(cpu, opcode),

        Inx => inc_dec::execute_inx(cpu, opcode),
        Iny => inc_dec::execute_iny(cpu, opcode),
        Dex => inc_dec::execute_dex(cpu, opcode),
        Dey => inc_dec::execute_dey(cpu, opcode),

        Pha => stack::execute_pha(cpu, opcode),
        Pla => stack::execute_pla(cpu, opcode),
        Php => stack::execute_php(cpu, opcode),
        Plp => stack::execute_plp(cpu, opcode),

        Bpl => branches::execute_bpl(cpu, opcode),
        Bmi => branches::execute_bmi(cpu, opcode),
        Bvc => branches::execute_bvc(cpu, opcode),
        Bvs => branches::execute_bvs(cpu, opcode),
        Bcc => branches::execute_bcc(cpu, opcode),
        Bcs => branches::execute_bcs(cpu, opcode),
        Bne => branches::execute_bne(cpu, opcode),
        Beq => branches::execute_beq(cpu, opcode),

        Jmp => control::execute_jmp(cpu, opcode),
        Jsr => control::execute_jsr(cpu, opcode),
        Rts => control::execute_rts(cpu, opcode),
        Brk => control::execute_brk(cpu, opcode),
        Nop => control::execute_nop(cpu, opcode),

        Clc => flags::execute_clc(cpu, opcode),
        Sec => flags::execute_sec(cpu, opcode),
        Cli => flags::execute_cli(cpu, opcode),
        Sei => flags::execute_sei(cpu, opcode),
        Cld => flags::execute_cld(cpu, opcode),
        Sed => flags::execute_sed(cpu, opcode),
        Clv => flags::execute_clv(cpu, opcode),

        Jam => illegal::execute_jam(cpu, opcode),
        Slo => illegal::execute_slo(cpu, opcode),
    }
}
