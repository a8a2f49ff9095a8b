// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ActressRequestDto {
    #[serde(default)]
    #[validate(length(max = 200, message = "Name is too long"))]
    pub name: String,
}
