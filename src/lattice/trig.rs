//! # 角度制三角函数
//!
//! 晶胞角度一律以度为单位，这里集中提供度制的正/反三角函数。

/// sin(x)，x 为度
pub fn sind(x: f64) -> f64 {
    x.to_radians().sin()
}

/// cos(x)，x 为度
pub fn cosd(x: f64) -> f64 {
    x.to_radians().cos()
}

/// tan(x)，x 为度
pub fn tand(x: f64) -> f64 {
    x.to_radians().tan()
}

/// arcsin，返回度
pub fn asind(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// arccos，返回度
pub fn acosd(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// arctan，返回度
pub fn atand(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// atan2(y, x)，返回度
pub fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// 由 1/d² 计算 d 并保留 `places` 位小数
pub fn rdsq2d(rdsq: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (scale / rdsq.sqrt()).round() / scale
}
