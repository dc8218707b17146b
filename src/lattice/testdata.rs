//! 晶格引擎回归测试数据（独立晶体学工具箱计算的参考值）

use nalgebra::Matrix3;

pub struct CellCase {
    pub cell: [f64; 6],
    pub g: [[f64; 3]; 3],
    pub big_g: [[f64; 3]; 3],
    pub reciprocal_cell: [f64; 6],
    pub volume: f64,
    pub reciprocal_volume: f64,
}

pub const CELL_TEST_DATA: [CellCase; 3] = [
    CellCase {
        cell: [4.0, 4.0, 4.0, 90.0, 90.0, 90.0],
        g: [
            [1.60000000e+01, 9.79717439e-16, 9.79717439e-16],
            [9.79717439e-16, 1.60000000e+01, 9.79717439e-16],
            [9.79717439e-16, 9.79717439e-16, 1.60000000e+01],
        ],
        big_g: [
            [6.25000000e-02, 3.82702125e-18, 3.82702125e-18],
            [3.82702125e-18, 6.25000000e-02, 3.82702125e-18],
            [3.82702125e-18, 3.82702125e-18, 6.25000000e-02],
        ],
        reciprocal_cell: [0.25, 0.25, 0.25, 90.0, 90.0, 90.0],
        volume: 64.0,
        reciprocal_volume: 0.015625,
    },
    CellCase {
        cell: [4.1, 5.2, 6.3, 100.0, 80.0, 130.0],
        g: [
            [16.81, -13.70423184, 4.48533243],
            [-13.70423184, 27.04, -5.6887143],
            [4.48533243, -5.6887143, 39.69],
        ],
        big_g: [
            [0.10206349, 0.05083339, -0.00424823],
            [0.05083339, 0.06344997, 0.00334956],
            [-0.00424823, 0.00334956, 0.02615544],
        ],
        reciprocal_cell: [
            0.31947376387537696,
            0.25189277536327803,
            0.16172643497798223,
            85.283666420376008,
            94.716333579624006,
            50.825714168082683,
        ],
        volume: 100.98576357983838,
        reciprocal_volume: 0.0099023858863968445,
    },
    CellCase {
        cell: [3.5, 3.5, 6.0, 90.0, 90.0, 120.0],
        g: [
            [1.22500000e+01, -6.12500000e+00, 1.28587914e-15],
            [-6.12500000e+00, 1.22500000e+01, 1.28587914e-15],
            [1.28587914e-15, 1.28587914e-15, 3.60000000e+01],
        ],
        big_g: [
            [1.08843537e-01, 5.44217687e-02, 3.36690552e-18],
            [5.44217687e-02, 1.08843537e-01, 3.36690552e-18],
            [3.36690552e-18, 3.36690552e-18, 2.77777778e-02],
        ],
        reciprocal_cell: [
            0.32991443953692895,
            0.32991443953692895,
            0.16666666666666669,
            90.0,
            90.0,
            60.000000000000021,
        ],
        volume: 63.652867178156257,
        reciprocal_volume: 0.015710211406520427,
    },
];

/// (分数坐标, 笛卡尔坐标) 对
pub type CoordPair = ([f64; 3], [f64; 3]);

pub const COORD_TEST_DATA: [([f64; 6], [CoordPair; 7]); 3] = [
    (
        [4.0, 4.0, 4.0, 90.0, 90.0, 90.0],
        [
            ([0.1, 0.0, 0.0], [0.4, 0.0, 0.0]),
            ([0.0, 0.1, 0.0], [2.4492935982947065e-17, 0.4, 0.0]),
            (
                [0.0, 0.0, 0.1],
                [2.4492935982947065e-17, -2.4492935982947065e-17, 0.4],
            ),
            ([0.1, 0.2, 0.3], [0.40000000000000013, 0.79999999999999993, 1.2]),
            ([0.2, 0.3, 0.1], [0.80000000000000016, 1.2, 0.4]),
            ([0.3, 0.2, 0.1], [1.2, 0.80000000000000004, 0.4]),
            ([0.5, 0.5, 0.5], [2.0, 1.9999999999999998, 2.0]),
        ],
    ),
    (
        [4.1, 5.2, 6.3, 100.0, 80.0, 130.0],
        [
            ([0.1, 0.0, 0.0], [0.41, 0.0, 0.0]),
            (
                [0.0, 0.1, 0.0],
                [-0.33424955703700043, 0.39834311042186865, 0.0],
            ),
            (
                [0.0, 0.0, 0.1],
                [0.10939835193016617, -0.051013289294572106, 0.6183281045774256],
            ),
            (
                [0.1, 0.2, 0.3],
                [0.069695941716497567, 0.64364635296002093, 1.8549843137322766],
            ),
            (
                [0.2, 0.3, 0.1],
                [-0.073350319180835066, 1.1440160419710339, 0.6183281045774256],
            ),
            (
                [0.3, 0.2, 0.1],
                [0.67089923785616512, 0.74567293154916525, 0.6183281045774256],
            ),
            (
                [0.5, 0.5, 0.5],
                [0.92574397446582857, 1.7366491056364828, 3.0916405228871278],
            ),
        ],
    ),
    (
        [3.5, 3.5, 6.0, 90.0, 90.0, 120.0],
        [
            ([0.1, 0.0, 0.0], [0.35000000000000003, 0.0, 0.0]),
            ([0.0, 0.1, 0.0], [-0.17499999999999993, 0.3031088913245536, 0.0]),
            (
                [0.0, 0.0, 0.1],
                [3.6739403974420595e-17, -3.6739403974420595e-17, 0.60000000000000009],
            ),
            (
                [0.1, 0.2, 0.3],
                [2.7675166561703527e-16, 0.60621778264910708, 1.7999999999999998],
            ),
            (
                [0.2, 0.3, 0.1],
                [0.17500000000000041, 0.90932667397366063, 0.60000000000000009],
            ),
            (
                [0.3, 0.2, 0.1],
                [0.70000000000000018, 0.6062177826491072, 0.60000000000000009],
            ),
            ([0.5, 0.5, 0.5], [0.87500000000000067, 1.5155444566227676, 3.0]),
        ],
    ),
];

/// 与 numpy.allclose 相同的判据: |x - y| <= 1e-8 + 1e-5·|y|
pub fn close(x: f64, y: f64) -> bool {
    (x - y).abs() <= 1e-8 + 1e-5 * y.abs()
}

pub fn allclose(xs: &[f64], ys: &[f64]) -> bool {
    xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| close(*x, *y))
}

pub fn allclose_mat(m: &Matrix3<f64>, expected: &[[f64; 3]; 3]) -> bool {
    (0..3).all(|i| (0..3).all(|j| close(m[(i, j)], expected[i][j])))
}
