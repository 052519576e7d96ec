// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

/// Binary-prefixed size units, largest first.
const UNITS: [(u64, &str); 6] = [
    (1 << 50, "P"),
    (1 << 40, "T"),
    (1 << 30, "G"),
    (1 << 20, "M"),
    (1 << 10, "K"),
    (1, "B"),
];

/// Format a byte count as a short human-readable string (`2K`, `5M`, ...).
///
/// Values are truncated to whole units, so `3000` renders as `2K`.
pub fn human_size(bytes: u64) -> String {
    for (factor, suffix) in UNITS {
        if bytes >= factor {
            return format!("{}{}", bytes / factor, suffix);
        }
    }
    "0B".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(human_size(0), "0B");
    }

    #[test]
    fn test_bytes() {
        assert_eq!(human_size(1), "1B");
        assert_eq!(human_size(1023), "1023B");
    }

    #[test]
    fn test_kilobytes_truncate() {
        assert_eq!(human_size(1024), "1K");
        assert_eq!(human_size(2048), "2K");
        assert_eq!(human_size(3000), "2K");
    }

    #[test]
    fn test_larger_units() {
        assert_eq!(human_size(5 * (1 << 20)), "5M");
        assert_eq!(human_size(3 * (1 << 30)), "3G");
        assert_eq!(human_size(1 << 40), "1T");
        assert_eq!(human_size(1 << 50), "1P");
    }
}
