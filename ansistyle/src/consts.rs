//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


/// The escape character that opens every control sequence.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer (`ESC [`), the prefix of every styling run.
pub const CSI: &str = "\x1b[";

/// Final byte of a Select Graphic Rendition sequence.
pub const SGR_TERMINATOR: char = 'm';

/// Separator between parameters inside an SGR sequence.
pub const SGR_SEPARATOR: char = ';';

/// Sequence closing a styled run (`ESC [ 0 m`).
pub const SGR_RESET: &str = "\x1b[0m";

/// SGR parameter that resets all attributes.
pub const RESET_CODE: u8 = 0;

/// SGR parameter introducing an extended foreground color.
pub const SET_FOREGROUND: u8 = 38;

/// SGR parameter introducing an extended background color.
pub const SET_BACKGROUND: u8 = 48;

/// Extended color sub-form selecting a 256-color palette index (`38;5;n`).
pub const SET_8BIT: u8 = 5;

/// Extended color sub-form selecting a 24-bit RGB value (`38;2;r;g;b`).
pub const SET_24BIT: u8 = 2;

/// Sequence closing a styled run in the XcodeColors format.
pub const XCODE_RESET: &str = "\x1b[;";

/// Terminator of a single XcodeColors code (`ESC [ fg255,0,0 ;`).
pub const XCODE_TERMINATOR: char = ';';

/// Estimated escape overhead per styled segment, used to pre-size output buffers.
pub(crate) const SEGMENT_OVERHEAD: usize = 20;
