//! Record declarations shared by the integration tests.

#![allow(dead_code)]

use fieldstream::prelude::*;
use serde::Serialize;

// ============================================================================
// COUNTED FIELDS
// ============================================================================

/// `<n>: <n ints>; <m>: <m words>; <r>x<c>: <r*c floats>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VecCount {
    pub int_size: Field<i32>,
    pub int_arr: Field<i32>,
    pub str_size: Field<i32>,
    pub str_arr: Field<String>,
    pub rows: Field<i32>,
    pub cols: Field<i32>,
    pub mat: Field<f32>,
}

impl Record for VecCount {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let int_size: Field<i32> = fields.field("int_size", Quantifier::Single)?;
        fields.skip(Quantifier::expect(':'))?;
        let int_arr = fields.field("int_arr", Quantifier::count(int_size.count()?))?;
        fields.skip(Quantifier::expect(';'))?;
        let str_size: Field<i32> = fields.field("str_size", Quantifier::Single)?;
        fields.skip(Quantifier::expect(':'))?;
        let str_arr = fields.field("str_arr", Quantifier::count(str_size.count()?))?;
        fields.skip(Quantifier::expect(';'))?;
        let rows: Field<i32> = fields.field("rows", Quantifier::Single)?;
        fields.skip(Quantifier::expect('x'))?;
        let cols: Field<i32> = fields.field("cols", Quantifier::Single)?;
        fields.skip(Quantifier::expect(':'))?;
        let mat = fields.field("mat", Quantifier::count(rows.count()? * cols.count()?))?;
        Ok(Self {
            int_size,
            int_arr,
            str_size,
            str_arr,
            rows,
            cols,
            mat,
        })
    }
}

/// `<r>x<c>: <r*c doubles>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartMat {
    pub rows: Field<i32>,
    pub cols: Field<i32>,
    pub mat: Field<f64>,
}

impl Record for PartMat {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let rows: Field<i32> = fields.field("rows", Quantifier::Single)?;
        fields.skip(Quantifier::expect('x'))?;
        let cols: Field<i32> = fields.field("cols", Quantifier::Single)?;
        fields.skip(Quantifier::expect(':'))?;
        let mat = fields.field("mat", Quantifier::count(rows.count()? * cols.count()?))?;
        Ok(Self { rows, cols, mat })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VecWithMat {
    pub int_size: Field<i32>,
    pub int_arr: Field<i32>,
    pub str_size: Field<i32>,
    pub str_arr: Field<String>,
    pub mat: Field<PartMat>,
}

impl Record for VecWithMat {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let int_size: Field<i32> = fields.field("int_size", Quantifier::Single)?;
        fields.skip(Quantifier::expect(':'))?;
        let int_arr = fields.field("int_arr", Quantifier::count(int_size.count()?))?;
        fields.skip(Quantifier::expect(';'))?;
        let str_size: Field<i32> = fields.field("str_size", Quantifier::Single)?;
        fields.skip(Quantifier::expect(':'))?;
        let str_arr = fields.field("str_arr", Quantifier::count(str_size.count()?))?;
        fields.skip(Quantifier::expect(';'))?;
        let mat = fields.field("mat", Quantifier::Single)?;
        Ok(Self {
            int_size,
            int_arr,
            str_size,
            str_arr,
            mat,
        })
    }
}

/// `<int>, <word> ;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartStruct {
    pub num: Field<i32>,
    pub str: Field<String>,
}

impl Record for PartStruct {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let num = fields.field("num", Quantifier::Single)?;
        fields.skip(Quantifier::expect(','))?;
        let str = fields.field("str", Quantifier::Single)?;
        fields.skip(Quantifier::expect(';'))?;
        Ok(Self { num, str })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VecStruct {
    pub arr: Field<PartStruct>,
}

impl Record for VecStruct {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let arr = fields.field("arr", Quantifier::count(3))?;
        Ok(Self { arr })
    }
}

/// `<n>: <n ints> <int>`
#[derive(Debug, Clone, PartialEq)]
pub struct CountThenTail {
    pub size: Field<u64>,
    pub items: Field<i32>,
    pub tail: Field<i32>,
}

impl Record for CountThenTail {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let size: Field<u64> = fields.field("size", Quantifier::Single)?;
        fields.skip(Quantifier::expect(':'))?;
        let items = fields.field("items", Quantifier::count(size.count()?))?;
        let tail = fields.field("tail", Quantifier::Single)?;
        Ok(Self { size, items, tail })
    }
}

/// A signed count, for rejecting negative sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedCount {
    pub size: Field<i32>,
    pub items: Field<i32>,
}

impl Record for SignedCount {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let size: Field<i32> = fields.field("size", Quantifier::Single)?;
        fields.skip(Quantifier::expect(':'))?;
        let items = fields.field("items", Quantifier::count(size.count()?))?;
        Ok(Self { size, items })
    }
}

// ============================================================================
// SINGLE VALUES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct IndVals {
    pub int_val: Field<i32>,
    pub float_val: Field<f32>,
    pub s1: Field<String>,
    pub s2: Field<String>,
}

impl Record for IndVals {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let int_val = fields.field("int_val", Quantifier::Single)?;
        let float_val = fields.field("float_val", Quantifier::expect(13.5))?;
        let s1 = fields.field("s1", Quantifier::Single)?;
        let s2 = fields.field("s2", Quantifier::expect("world".to_string()))?;
        Ok(Self {
            int_val,
            float_val,
            s1,
            s2,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndValsFail {
    pub int_val: Field<i32>,
    pub float_val: Field<f32>,
}

impl Record for IndValsFail {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let int_val = fields.field("int_val", Quantifier::Single)?;
        let float_val = fields.field("float_val", Quantifier::expect(33.33))?;
        Ok(Self { int_val, float_val })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndValsWrongType {
    pub int_val: Field<i32>,
    pub float_val: Field<f32>,
    pub wrong_type: Field<i32>,
}

impl Record for IndValsWrongType {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let int_val = fields.field("int_val", Quantifier::Single)?;
        let float_val = fields.field("float_val", Quantifier::expect(13.5))?;
        let wrong_type = fields.field("wrong_type", Quantifier::Single)?;
        Ok(Self {
            int_val,
            float_val,
            wrong_type,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndValsSkip {
    pub val: Field<String>,
}

impl Record for IndValsSkip {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        fields.skip(Quantifier::expect(42i32))?;
        fields.skip::<f32>(Quantifier::Single)?;
        fields.skip(Quantifier::expect("hello".to_string()))?;
        let val = fields.field("val", Quantifier::Single)?;
        Ok(Self { val })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndValsSkipFail;

impl Record for IndValsSkipFail {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        fields.skip(Quantifier::expect(44i32))?;
        Ok(Self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndValsSkipFailType;

impl Record for IndValsSkipFailType {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        fields.skip::<i32>(Quantifier::Single)?;
        fields.skip::<f32>(Quantifier::Single)?;
        fields.skip::<i32>(Quantifier::Single)?;
        Ok(Self)
    }
}

// ============================================================================
// DELIMITED FIELDS
// ============================================================================

/// `<ints> | <ints> \n <ints>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VecUntil {
    pub arr1: Field<i32>,
    pub arr2: Field<i32>,
    pub arr3: Field<i32>,
}

impl Record for VecUntil {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let arr1 = fields.field("arr1", Quantifier::until('|'))?;
        fields.skip(Quantifier::expect('|'))?;
        let arr2 = fields.field("arr2", Quantifier::through('\n'))?;
        let arr3 = fields.field("arr3", Quantifier::to_end())?;
        Ok(Self { arr1, arr2, arr3 })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VecSkipUntil {
    pub arr: Field<i32>,
}

impl Record for VecSkipUntil {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        fields.skip::<i32>(Quantifier::through('|'))?;
        let arr = fields.field("arr", Quantifier::through_line())?;
        fields.skip::<i32>(Quantifier::to_end())?;
        Ok(Self { arr })
    }
}

/// A raw-character line followed by numbers to the end.
#[derive(Debug, Clone, PartialEq)]
pub struct TitledNumbers {
    pub title: Field<char>,
    pub numbers: Field<i64>,
}

impl Record for TitledNumbers {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let title = fields.field("title", Quantifier::through_line())?;
        let numbers = fields.field("numbers", Quantifier::to_end())?;
        Ok(Self { title, numbers })
    }
}

impl TitledNumbers {
    pub fn title_text(&self) -> String {
        self.title.iter().collect()
    }
}

// ============================================================================
// MIXED
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub val1: Field<f32>,
    pub val2: Field<f32>,
}

impl Record for Point {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let val1 = fields.field("val1", Quantifier::Single)?;
        let val2 = fields.field("val2", Quantifier::Single)?;
        Ok(Self { val1, val2 })
    }
}

/// Every quantifier in one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Everything {
    pub a: Field<i32>,
    pub b: Field<Point>,
    pub arr: Field<i32>,
    pub arr1: Field<i32>,
    pub arr2: Field<i32>,
    pub arr3: Field<i32>,
}

impl Record for Everything {
    fn parse_fields(fields: &mut Fields<'_, '_>) -> Result<Self, ParseError> {
        let a: Field<i32> = fields.field("a", Quantifier::expect(3))?;
        let b = fields.field("b", Quantifier::Single)?;
        let arr = fields.field("arr", Quantifier::count(a.count()?))?;
        let arr1 = fields.field("arr1", Quantifier::until('|'))?;
        fields.skip(Quantifier::expect("|".to_string()))?;
        let arr2 = fields.field("arr2", Quantifier::through('\n'))?;
        let arr3 = fields.field("arr3", Quantifier::to_end())?;
        Ok(Self {
            a,
            b,
            arr,
            arr1,
            arr2,
            arr3,
        })
    }
}

pub const VEC_COUNT_INPUT: &str = "5: 3 4 5 6 7; \n 3: ab cd de ; \n 2x3: 1.5 2.5 3.5 \n 4.5 5.5 6.5";
pub const VEC_STRUCT_INPUT: &str = "4, hello ; 5, world ; 6, woohoo ;";
pub const IND_VALS_INPUT: &str = "42 13.5 hello world";
pub const VEC_UNTIL_INPUT: &str = "1 2 3 4 5 | 6 7 8 9 10 \n 11 12 13";
pub const EVERYTHING_INPUT: &str = "3 2.5 3.25 4 5 6 1 2 3 | 4 5 6\n7 8 9";
