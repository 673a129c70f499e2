use serde::{Deserialize, Serialize};

/// 轴对齐边界框 - R-tree 中每个条目携带的 (min, max)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub min: [f64; 2], // [x_min, y_min]
    pub max: [f64; 2], // [x_max, y_max]
}

impl Rectangle {
    /// 创建新的矩形，调用方保证 min <= max
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Rectangle {
            min: [x_min, y_min],
            max: [x_max, y_max],
        }
    }

    /// 由两个角点创建矩形
    pub fn from_corners(min: [f64; 2], max: [f64; 2]) -> Self {
        Rectangle { min, max }
    }

    /// 创建一个点矩形
    pub fn from_point(x: f64, y: f64) -> Self {
        Rectangle {
            min: [x, y],
            max: [x, y],
        }
    }

    /// 计算矩形面积
    pub fn area(&self) -> f64 {
        (self.max[0] - self.min[0]) * (self.max[1] - self.min[1])
    }

    /// 计算两个矩形的并集MBR
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let mut out = *self;
        out.expand(other);
        out
    }

    /// 原地扩展以包含另一个矩形
    pub fn expand(&mut self, other: &Rectangle) {
        if other.min[0] < self.min[0] {
            self.min[0] = other.min[0];
        }
        if other.max[0] > self.max[0] {
            self.max[0] = other.max[0];
        }
        if other.min[1] < self.min[1] {
            self.min[1] = other.min[1];
        }
        if other.max[1] > self.max[1] {
            self.max[1] = other.max[1];
        }
    }

    /// 并集面积，不构造中间矩形
    pub fn unioned_area(&self, other: &Rectangle) -> f64 {
        (self.max[0].max(other.max[0]) - self.min[0].min(other.min[0]))
            * (self.max[1].max(other.max[1]) - self.min[1].min(other.min[1]))
    }

    /// 判断两个矩形是否相交（边界接触也算相交）
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(other.min[0] > self.max[0]
            || other.max[0] < self.min[0]
            || other.min[1] > self.max[1]
            || other.max[1] < self.min[1])
    }

    /// 判断当前矩形是否包含另一个矩形
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.min[0] <= other.min[0]
            && self.min[1] <= other.min[1]
            && self.max[0] >= other.max[0]
            && self.max[1] >= other.max[1]
    }

    /// 判断当前矩形是否包含一个点
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.min[0] <= x && x <= self.max[0] && self.min[1] <= y && y <= self.max[1]
    }

    /// 计算扩大到包含另一个矩形所需的面积增量
    pub fn enlargement(&self, other: &Rectangle) -> f64 {
        self.unioned_area(other) - self.area()
    }

    /// 子矩形是否贴着当前矩形的边界
    ///
    /// 删除一个不贴边的子条目不会改变父矩形，可以跳过重算
    pub fn on_edge(&self, child: &Rectangle) -> bool {
        !(child.min[0] > self.min[0]
            && child.min[1] > self.min[1]
            && child.max[0] < self.max[0]
            && child.max[1] < self.max[1])
    }

    /// 跨度最大的轴：0 为 X，1 为 Y（相等时取 X）
    pub fn largest_axis(&self) -> usize {
        if self.max[1] - self.min[1] > self.max[0] - self.min[0] {
            1
        } else {
            0
        }
    }

    /// 盒距离：各轴间隙平方之和，重叠时为 0
    pub fn box_dist(&self, other: &Rectangle) -> f64 {
        let mut dist = 0.0;
        for axis in 0..2 {
            let lo = self.min[axis].max(other.min[axis]);
            let hi = self.max[axis].min(other.max[axis]);
            let gap = lo - hi;
            if gap > 0.0 {
                dist += gap * gap;
            }
        }
        dist
    }

    /// 计算矩形中心点
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }

    /// 判断矩形是否为点（宽度和高度都为0）
    pub fn is_point(&self) -> bool {
        self.min[0] == self.max[0] && self.min[1] == self.max[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_union() {
        let rect1 = Rectangle::new(0.0, 0.0, 5.0, 5.0);
        let rect2 = Rectangle::new(3.0, 3.0, 8.0, 8.0);
        assert_eq!(rect1.union(&rect2), Rectangle::new(0.0, 0.0, 8.0, 8.0));
        assert_eq!(rect1.unioned_area(&rect2), 64.0);
    }

    #[test]
    fn test_rectangle_intersects_touching() {
        let rect1 = Rectangle::new(0.0, 0.0, 5.0, 5.0);
        // 只接触边界也算相交
        let rect2 = Rectangle::new(5.0, 5.0, 8.0, 8.0);
        let rect3 = Rectangle::new(10.0, 10.0, 15.0, 15.0);
        assert!(rect1.intersects(&rect2));
        assert!(!rect1.intersects(&rect3));
    }

    #[test]
    fn test_rectangle_enlargement() {
        let rect1 = Rectangle::new(0.0, 0.0, 5.0, 5.0);
        let rect2 = Rectangle::new(3.0, 3.0, 8.0, 8.0);
        assert_eq!(rect1.enlargement(&rect2), 39.0); // 8*8 - 5*5
        assert_eq!(rect1.enlargement(&Rectangle::from_point(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_on_edge() {
        let parent = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(!parent.on_edge(&Rectangle::new(1.0, 1.0, 9.0, 9.0)));
        assert!(parent.on_edge(&Rectangle::new(0.0, 1.0, 9.0, 9.0)));
        assert!(parent.on_edge(&Rectangle::new(1.0, 1.0, 9.0, 10.0)));
    }

    #[test]
    fn test_box_dist() {
        let rect = Rectangle::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(rect.box_dist(&Rectangle::from_point(1.0, 1.0)), 0.0);
        assert_eq!(rect.box_dist(&Rectangle::from_point(5.0, 2.0)), 9.0);
        assert_eq!(rect.box_dist(&Rectangle::from_point(5.0, 6.0)), 25.0);
        // 对称
        let other = Rectangle::new(4.0, -3.0, 6.0, -1.0);
        assert_eq!(rect.box_dist(&other), other.box_dist(&rect));
        assert_eq!(rect.box_dist(&other), 4.0 + 1.0);
    }

    #[test]
    fn test_largest_axis() {
        assert_eq!(Rectangle::new(0.0, 0.0, 5.0, 2.0).largest_axis(), 0);
        assert_eq!(Rectangle::new(0.0, 0.0, 2.0, 5.0).largest_axis(), 1);
        assert_eq!(Rectangle::new(0.0, 0.0, 3.0, 3.0).largest_axis(), 0);
    }
}
