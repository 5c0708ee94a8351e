// Thu Oct 15 2026 - Alex

use crate::binary::{BinaryKind, Section};
use crate::memory::{Address, MemoryKind};
use crate::output::renderer::Renderer;
use crate::utils::StringUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmOptions {
    /// Print in hexadecimal when the value is not an address.
    pub hexa: bool,
    /// Show the string found at the address if it is not a symbol.
    pub print_data: bool,
    /// Never show data, even for non-symbols. Used for jump and call targets.
    pub force_no_data: bool,
}

impl Default for ImmOptions {
    fn default() -> Self {
        Self {
            hexa: false,
            print_data: true,
            force_no_data: false,
        }
    }
}

impl ImmOptions {
    pub fn hex() -> Self {
        Self {
            hexa: true,
            ..Self::default()
        }
    }

    pub fn branch_target() -> Self {
        Self {
            force_no_data: true,
            ..Self::default()
        }
    }
}

impl<'a> Renderer<'a> {
    /// Prints an immediate operand. `op_size` is in bytes. Returns true when
    /// a hexadecimal echo of the value would still help the reader.
    pub fn immediate(&mut self, value: i64, op_size: usize, section: Option<&Section>, opts: ImmOptions) -> bool {
        let hexa = opts.hexa || self.ctx.config.hex_immediates;
        let binary = self.binary;
        let addr = Address::new(value as u64);

        let label_printed = self.operand_label(addr);
        if label_printed {
            let kind = self.db.kind_of(addr);
            if (self.db.is_xref(addr) && kind != MemoryKind::Unknown)
                || kind == MemoryKind::Unmapped
                || binary.kind() == BinaryKind::Unknown
            {
                return true;
            }
        }

        let section = section.or_else(|| binary.section_of(addr));

        // A raw image at base 0 makes every small number look like an
        // address; only symbols count then.
        let raw_base_zero = binary.kind() == BinaryKind::Raw && binary.raw_base() == 0;

        if let Some(section) = section.filter(|_| !raw_base_zero) {
            log::trace!("immediate {:#x} resolved in section {}", value, section.name);
            if !label_printed {
                self.value_address(addr);
            }

            if !opts.force_no_data && opts.print_data && !binary.has_symbol(addr) && section.is_data {
                let preview = binary.string_at(addr, self.ctx.config.max_data_size);
                if !preview.is_empty() && preview != "\"\"" {
                    self.plain(" ");
                    self.string(&preview);
                }
            }
            return true;
        }

        if label_printed {
            return true;
        }

        if op_size == 1 {
            self.string(&format!("'{}'", StringUtils::char_repr(value)));
            return false;
        }

        if hexa {
            self.plain(&StringUtils::hex_literal(value));
            return false;
        }

        if value > 0 {
            if let Some(text) = StringUtils::packed_text(value, op_size) {
                self.string(&format!("\"{}\"", StringUtils::escape_string(&text)));
                return false;
            }
        }

        self.plain(&value.to_string());
        true
    }
}
