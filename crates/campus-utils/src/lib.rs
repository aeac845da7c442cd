// campus-connect/campus-utils
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
