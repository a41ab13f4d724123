use std::fmt;

/// Offset of the header inside a cartridge image.
const HEADER_START: usize = 0x0100;
/// One past the last header byte (0x014F).
const HEADER_END: usize = 0x0150;

/// The bitmap every licensed cartridge carries at 0x0104..=0x0133.
const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

/// Old licensee value meaning "look at the new licensee code instead".
const USE_NEW_LICENSEE: u8 = 0x33;

/// Cartridge header found at 0x0100..=0x014F of every image.
///
/// Parsed purely for diagnostics; nothing in the CPU depends on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    /// 0x0100..=0x0103, usually `NOP; JP 0x0150`.
    pub entry_point: [u8; 4],
    /// 0x0104..=0x0133.
    pub logo: [u8; 48],
    /// 0x0134..=0x0143, upper-case ASCII padded with NULs.
    pub title: String,
    /// 0x0144..=0x0145, two ASCII characters.
    pub new_licensee_code: [u8; 2],
    pub sgb_flag: u8,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    pub destination_code: u8,
    pub old_licensee_code: u8,
    pub mask_rom_version: u8,
    pub header_checksum: u8,
    /// 0x014E..=0x014F, big-endian.
    pub global_checksum: u16,
    computed_checksum: u8,
}

impl CartridgeHeader {
    /// Parse the header out of a full cartridge image.
    ///
    /// Returns `None` when the image is too short to contain one.
    pub fn parse(rom: &[u8]) -> Option<Self> {
        let bytes = rom.get(HEADER_START..HEADER_END)?;
        let at = |addr: usize| bytes[addr - HEADER_START];

        let mut entry_point = [0; 4];
        entry_point.copy_from_slice(&bytes[0x00..0x04]);
        let mut logo = [0; 48];
        logo.copy_from_slice(&bytes[0x04..0x34]);

        let raw_title = &bytes[0x34..0x44];
        let title_len = raw_title.iter().position(|&b| b == 0).unwrap_or(raw_title.len());
        let title = String::from_utf8_lossy(&raw_title[..title_len]).trim_end().to_string();

        Some(Self {
            entry_point,
            logo,
            title,
            new_licensee_code: [at(0x144), at(0x145)],
            sgb_flag: at(0x146),
            cartridge_type: at(0x147),
            rom_size_code: at(0x148),
            ram_size_code: at(0x149),
            destination_code: at(0x14A),
            old_licensee_code: at(0x14B),
            mask_rom_version: at(0x14C),
            header_checksum: at(0x14D),
            global_checksum: u16::from_be_bytes([at(0x14E), at(0x14F)]),
            computed_checksum: header_checksum(rom),
        })
    }

    /// Checksum over 0x0134..=0x014C as computed by the boot ROM.
    pub fn computed_checksum(&self) -> u8 {
        self.computed_checksum
    }

    pub fn checksum_ok(&self) -> bool {
        self.computed_checksum == self.header_checksum
    }

    pub fn logo_ok(&self) -> bool {
        self.logo == NINTENDO_LOGO
    }

    pub fn cartridge_type_name(&self) -> &'static str {
        cartridge_type_name(self.cartridge_type)
    }

    /// ROM size in bytes: 32 KiB shifted left by the size code.
    pub fn rom_size_bytes(&self) -> Option<usize> {
        (self.rom_size_code <= 0x08).then(|| 0x8000 << self.rom_size_code)
    }

    pub fn ram_size_bytes(&self) -> Option<usize> {
        match self.ram_size_code {
            0x00 | 0x01 => Some(0),
            0x02 => Some(8 * 1024),
            0x03 => Some(32 * 1024),
            0x04 => Some(128 * 1024),
            0x05 => Some(64 * 1024),
            _ => None,
        }
    }

    pub fn ram_size_name(&self) -> &'static str {
        match self.ram_size_code {
            0x00 => "none",
            0x01 => "unused",
            0x02 => "8 KiB (1 bank)",
            0x03 => "32 KiB (4 banks of 8 KiB)",
            0x04 => "128 KiB (16 banks of 8 KiB)",
            0x05 => "64 KiB (8 banks of 8 KiB)",
            _ => "unknown",
        }
    }

    pub fn destination_name(&self) -> &'static str {
        match self.destination_code {
            0x00 => "Japan",
            0x01 => "overseas",
            _ => "unknown",
        }
    }

    /// Publisher name, resolved through the new two-character code when the
    /// old code byte is 0x33.
    pub fn licensee(&self) -> &'static str {
        if self.old_licensee_code == USE_NEW_LICENSEE {
            new_licensee_name(self.new_licensee_code)
        } else {
            old_licensee_name(self.old_licensee_code)
        }
    }
}

impl fmt::Display for CartridgeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cartridge '{}': type={} (0x{:02X}) rom={} ram={} licensee={} destination={} version={}",
            self.title,
            self.cartridge_type_name(),
            self.cartridge_type,
            self.rom_size_bytes()
                .map(|bytes| format!("{} KiB", bytes / 1024))
                .unwrap_or_else(|| format!("unknown (0x{:02X})", self.rom_size_code)),
            self.ram_size_name(),
            self.licensee(),
            self.destination_name(),
            self.mask_rom_version,
        )
    }
}

/// `x = x - rom[i] - 1` over 0x0134..=0x014C.
fn header_checksum(rom: &[u8]) -> u8 {
    rom[0x0134..=0x014C]
        .iter()
        .fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1))
}

pub(crate) fn cartridge_type_name(code: u8) -> &'static str {
    match code {
        0x00 => "ROM ONLY",
        0x01 => "MBC1",
        0x02 => "MBC1+RAM",
        0x03 => "MBC1+RAM+BATTERY",
        0x05 => "MBC2",
        0x06 => "MBC2+BATTERY",
        0x08 => "ROM+RAM",
        0x09 => "ROM+RAM+BATTERY",
        0x0B => "MMM01",
        0x0C => "MMM01+RAM",
        0x0D => "MMM01+RAM+BATTERY",
        0x0F => "MBC3+TIMER+BATTERY",
        0x10 => "MBC3+TIMER+RAM+BATTERY",
        0x11 => "MBC3",
        0x12 => "MBC3+RAM",
        0x13 => "MBC3+RAM+BATTERY",
        0x19 => "MBC5",
        0x1A => "MBC5+RAM",
        0x1B => "MBC5+RAM+BATTERY",
        0x1C => "MBC5+RUMBLE",
        0x1D => "MBC5+RUMBLE+RAM",
        0x1E => "MBC5+RUMBLE+RAM+BATTERY",
        0x20 => "MBC6",
        0x22 => "MBC7+SENSOR+RUMBLE+RAM+BATTERY",
        0xFC => "POCKET CAMERA",
        0xFD => "BANDAI TAMA5",
        0xFE => "HuC3",
        0xFF => "HuC1+RAM+BATTERY",
        _ => "UNKNOWN",
    }
}

fn old_licensee_name(code: u8) -> &'static str {
    match code {
        0x00 => "None",
        0x01 | 0x31 => "Nintendo",
        0x08 | 0x38 => "Capcom",
        0x09 => "HOT-B",
        0x0A | 0xE0 => "Jaleco",
        0x0B => "Coconuts Japan",
        0x0C | 0x6E => "Elite Systems",
        0x13 | 0x69 => "Electronic Arts",
        0x18 => "Hudson Soft",
        0x19 => "ITC Entertainment",
        0x1A => "Yanoman",
        0x1D => "Japan Clary",
        0x1F | 0x4A | 0x61 => "Virgin Games",
        0x24 => "PCM Complete",
        0x25 => "San-X",
        0x28 | 0x7F | 0x97 | 0xC2 => "Kemco",
        0x29 => "SETA",
        0x30 | 0x70 => "Infogrames",
        0x32 | 0xA2 | 0xB2 => "Bandai",
        0x34 | 0xA4 => "Konami",
        0x35 => "HectorSoft",
        0x39 | 0x9D | 0xD9 => "Banpresto",
        0x3C => "Entertainment Interactive",
        0x3E => "Gremlin",
        0x41 => "Ubi Soft",
        0x42 | 0xEB => "Atlus",
        0x44 | 0x4D => "Malibu",
        0x46 | 0xCF => "Angel",
        0x47 => "Spectrum HoloByte",
        0x49 => "Irem",
        0x4F => "U.S. Gold",
        0x50 => "Absolute",
        0x51 | 0xB0 => "Acclaim",
        0x52 => "Activision",
        0x53 => "Sammy USA",
        0x54 => "GameTek",
        0x55 => "Park Place",
        0x56 | 0xDB | 0xFF => "LJN",
        0x57 => "Matchbox",
        0x59 => "Milton Bradley",
        0x5A => "Mindscape",
        0x5B => "Romstar",
        0x5C | 0xD6 => "Naxat Soft",
        0x5D => "Tradewest",
        0x60 => "Titus",
        0x67 => "Ocean",
        0x6F => "Electro Brain",
        0x71 => "Interplay",
        0x72 | 0xAA => "Broderbund",
        0x73 => "Sculptured Software",
        0x75 => "The Sales Curve",
        0x78 => "THQ",
        0x79 => "Accolade",
        0x7A => "Triffix Entertainment",
        0x7C => "MicroProse",
        0x80 => "Misawa Entertainment",
        0x83 => "LOZC",
        0x86 | 0xC4 => "Tokuma Shoten",
        0x8B => "Bullet-Proof Software",
        0x8C => "Vic Tokai",
        0x8E => "Ape",
        0x8F => "I'Max",
        0x91 => "Chunsoft",
        0x92 => "Video System",
        0x93 => "Tsubaraya Productions",
        0x95 | 0xE3 => "Varie",
        0x96 => "Yonezawa/S'Pal",
        0x99 => "Arc",
        0x9A => "Nihon Bussan",
        0x9B => "Tecmo",
        0x9C => "Imagineer",
        0x9F => "Nova",
        0xA1 => "Hori Electric",
        0xA6 => "Kawada",
        0xA7 => "Takara",
        0xA9 => "Technos Japan",
        0xAC => "Toei Animation",
        0xAD => "Toho",
        0xAF => "Namco",
        0xB1 => "ASCII or Nexsoft",
        0xB4 => "Square Enix",
        0xB6 => "HAL Laboratory",
        0xB7 => "SNK",
        0xB9 | 0xCE => "Pony Canyon",
        0xBA => "Culture Brain",
        0xBB => "Sunsoft",
        0xBD => "Sony Imagesoft",
        0xBF => "Sammy",
        0xC0 | 0xD0 => "Taito",
        0xC3 => "Square",
        0xC5 => "Data East",
        0xC6 => "Tonkin House",
        0xC8 => "Koei",
        0xC9 => "UFL",
        0xCA => "Ultra",
        0xCB => "Vap",
        0xCC => "Use Corporation",
        0xCD => "Meldac",
        0xD1 => "Sofel",
        0xD2 => "Quest",
        0xD3 => "Sigma Enterprises",
        0xD4 => "ASK Kodansha",
        0xD7 => "Copya System",
        0xDA => "Tomy",
        0xDD => "NCS",
        0xDE => "Human",
        0xDF => "Altron",
        0xE1 => "Towa Chiki",
        0xE2 => "Yutaka",
        0xE5 => "Epoch",
        0xE7 => "Athena",
        0xE8 => "Asmik Ace",
        0xE9 => "Natsume",
        0xEA => "King Records",
        0xEC => "Epic/Sony Records",
        0xEE => "IGS",
        0xF0 => "A Wave",
        0xF3 => "Extreme Entertainment",
        _ => "UNKNOWN",
    }
}

fn new_licensee_name(code: [u8; 2]) -> &'static str {
    match &code {
        b"00" => "None",
        b"01" | b"31" => "Nintendo",
        b"08" => "Capcom",
        b"13" | b"69" => "Electronic Arts",
        b"18" | b"38" => "Hudson Soft",
        b"19" => "B-AI",
        b"20" => "KSS",
        b"22" => "Planning Office WADA",
        b"24" => "PCM Complete",
        b"25" => "San-X",
        b"28" => "Kemco",
        b"29" => "SETA",
        b"30" => "Viacom",
        b"32" => "Bandai",
        b"33" | b"93" => "Ocean/Acclaim",
        b"34" | b"54" => "Konami",
        b"35" => "HectorSoft",
        b"37" => "Taito",
        b"39" => "Banpresto",
        b"41" => "Ubi Soft",
        b"42" => "Atlus",
        b"44" => "Malibu",
        b"46" => "Angel",
        b"47" => "Bullet-Proof Software",
        b"49" => "Irem",
        b"50" => "Absolute",
        b"51" => "Acclaim",
        b"52" => "Activision",
        b"53" => "Sammy USA",
        b"55" => "Hi Tech Expressions",
        b"56" => "LJN",
        b"57" => "Matchbox",
        b"58" => "Mattel",
        b"59" => "Milton Bradley",
        b"60" => "Titus",
        b"61" => "Virgin Games",
        b"64" => "LucasArts",
        b"67" => "Ocean",
        b"70" => "Infogrames",
        b"71" => "Interplay",
        b"72" => "Broderbund",
        b"73" => "Sculptured Software",
        b"75" => "The Sales Curve",
        b"78" => "THQ",
        b"79" => "Accolade",
        b"80" => "Misawa Entertainment",
        b"83" => "LOZC",
        b"86" => "Tokuma Shoten",
        b"87" => "Tsukuda Original",
        b"91" => "Chunsoft",
        b"92" => "Video System",
        b"95" => "Varie",
        b"96" => "Yonezawa/S'Pal",
        b"97" => "Kaneko",
        b"99" => "Pack-In-Video",
        b"9H" => "Bottom Up",
        b"A4" => "Konami (Yu-Gi-Oh!)",
        b"BL" => "MTO",
        b"DK" => "Kodansha",
        _ => "UNKNOWN",
    }
}
